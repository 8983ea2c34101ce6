use crate::record::NOT_APPLICABLE;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub elb_name: String,
    pub client_ip: String,
    pub client_port: u16,
    pub backend: Backend,
    pub request_processing_time: Timing,
    pub backend_processing_time: Timing,
    pub response_processing_time: Timing,
    pub elb_status_code: u16,
    /// 0 when the load balancer never got a response from a backend.
    pub backend_status_code: u16,
    pub received_bytes: u64,
    pub sent_bytes: u64,
    pub request: RequestLine,
    /// `-` when the client did not send one.
    pub user_agent: String,
    /// `-` for plain HTTP listeners.
    pub ssl_cipher: String,
    /// `-` for plain HTTP listeners.
    pub ssl_protocol: String,
}

impl LogRecord {
    pub fn request_url(&self) -> &str {
        &self.request.url
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self.backend, Backend::Dispatched { .. })
    }

    pub fn has_tls(&self) -> bool {
        self.ssl_cipher != NOT_APPLICABLE && self.ssl_protocol != NOT_APPLICABLE
    }

    pub fn user_agent(&self) -> Option<&str> {
        (self.user_agent != NOT_APPLICABLE).then_some(self.user_agent.as_str())
    }
}

/// Where the load balancer sent the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Dispatched { ip: String, port: u16 },
    /// Written as `-`: the request never reached a registered instance.
    NotDispatched,
}

/// One of the three processing-time columns.
///
/// The load balancer writes `-1` when a stage did not apply (e.g. the backend
/// timed out). The source token is kept verbatim so formatting reproduces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    seconds: Option<f64>,
    token: String,
}

impl Timing {
    pub const SENTINEL: &'static str = "-1";

    pub fn not_applicable() -> Self {
        Self {
            seconds: None,
            token: Self::SENTINEL.to_string(),
        }
    }

    /// Negative or non-finite values are treated as "not applicable".
    pub fn from_seconds(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds < 0.0 {
            return Self::not_applicable();
        }
        Self {
            seconds: Some(seconds),
            token: seconds.to_string(),
        }
    }

    /// Accepts `-1` or a plain non-negative decimal (`0.000073`, `2`).
    pub(crate) fn parse(token: &str) -> Option<Self> {
        if token == Self::SENTINEL {
            return Some(Self::not_applicable());
        }

        let plain_decimal = !token.is_empty()
            && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            && token.bytes().filter(|b| *b == b'.').count() <= 1;
        if !plain_decimal {
            return None;
        }

        let seconds = token.parse::<f64>().ok().filter(|s| s.is_finite())?;
        Some(Self {
            seconds: Some(seconds),
            token: token.to_string(),
        })
    }

    pub fn seconds(&self) -> Option<f64> {
        self.seconds
    }

    pub fn is_applicable(&self) -> bool {
        self.seconds.is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

/// The quoted `"METHOD URL PROTOCOL"` triplet.
///
/// Unparseable requests are logged as `"- - - "`, which leaves `- ` (with the
/// trailing space) in `protocol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub url: String,
    pub protocol: String,
}
