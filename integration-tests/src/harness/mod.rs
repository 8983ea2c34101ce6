pub mod fixtures;
pub mod tracing;

pub use self::tracing::{CapturedEvent, capture_events};
