//! Classic load balancer access-log records.
//!
//! One line of the access log maps to one [`LogRecord`]. Parsing is
//! format-preserving: formatting a parsed record with `Display` yields the
//! exact line it came from.
//!
//! Line layout:
//!
//! ```text
//! timestamp elb client:port backend:port request_processing_time
//! backend_processing_time response_processing_time elb_status_code
//! backend_status_code received_bytes sent_bytes "method url protocol"
//! "user_agent" ssl_cipher ssl_protocol
//! ```

mod error;
mod format;
mod parse;
mod types;

pub use error::*;
pub use parse::parse_line;
pub use types::*;

/// Timestamps are always written with six fractional digits and a `Z` suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Sentinel for backend, user agent and SSL fields.
pub const NOT_APPLICABLE: &str = "-";
