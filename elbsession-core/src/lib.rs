pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod pipeline;
pub mod record;
pub mod sessionize;

#[cfg(test)]
mod test_support;
