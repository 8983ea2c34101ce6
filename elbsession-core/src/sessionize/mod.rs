//! Gap-based session reconstruction.
//!
//! Records are partitioned by client IP and ordered by timestamp (ties keep
//! arrival order). A new session starts at a client's first request and
//! whenever the idle gap since the previous request exceeds the threshold.
//! Each record is tagged with a 1-based session number that only grows
//! within its client.

mod sessionizer;
#[cfg(test)]
mod tests;
mod types;

pub use sessionizer::*;
pub use types::*;

/// 15 minutes.
pub const DEFAULT_THRESHOLD_SECONDS: u64 = 15 * 60;
