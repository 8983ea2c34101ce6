use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line is empty")]
    Empty,

    #[error("missing field `{field}`")]
    MissingField { field: Field },

    #[error("expected opening quote for `{field}`")]
    ExpectedQuote { field: Field },

    #[error("unterminated quote in `{field}`")]
    UnterminatedQuote { field: Field },

    #[error("invalid value {value:?} for `{field}`")]
    InvalidValue { field: Field, value: String },

    #[error("unexpected input {rest:?} after `{field}`")]
    TrailingInput { field: Field, rest: String },
}

impl ParseError {
    pub(crate) fn invalid(field: Field, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }

    /// The field the parser was working on when it gave up.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Empty => None,
            Self::MissingField { field }
            | Self::ExpectedQuote { field }
            | Self::UnterminatedQuote { field }
            | Self::InvalidValue { field, .. }
            | Self::TrailingInput { field, .. } => Some(*field),
        }
    }
}

/// The 18 columns of an access-log line, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    ElbName,
    ClientIp,
    ClientPort,
    Backend,
    RequestProcessingTime,
    BackendProcessingTime,
    ResponseProcessingTime,
    ElbStatusCode,
    BackendStatusCode,
    ReceivedBytes,
    SentBytes,
    RequestMethod,
    RequestUrl,
    RequestProtocol,
    UserAgent,
    SslCipher,
    SslProtocol,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::ElbName => "elb",
            Field::ClientIp => "client_ip",
            Field::ClientPort => "client_port",
            Field::Backend => "backend",
            Field::RequestProcessingTime => "request_processing_time",
            Field::BackendProcessingTime => "backend_processing_time",
            Field::ResponseProcessingTime => "response_processing_time",
            Field::ElbStatusCode => "elb_status_code",
            Field::BackendStatusCode => "backend_status_code",
            Field::ReceivedBytes => "received_bytes",
            Field::SentBytes => "sent_bytes",
            Field::RequestMethod => "request_method",
            Field::RequestUrl => "request_url",
            Field::RequestProtocol => "request_protocol",
            Field::UserAgent => "user_agent",
            Field::SslCipher => "ssl_cipher",
            Field::SslProtocol => "ssl_protocol",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
