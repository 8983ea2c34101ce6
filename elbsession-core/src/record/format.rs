use crate::record::{Backend, LogRecord, NOT_APPLICABLE, RequestLine, TIMESTAMP_FORMAT, Timing};
use std::fmt;

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{} {} {} {} {} {} {} {} {} \"{}\" \"{}\" {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.elb_name,
            self.client_ip,
            self.client_port,
            self.backend,
            self.request_processing_time,
            self.backend_processing_time,
            self.response_processing_time,
            self.elb_status_code,
            self.backend_status_code,
            self.received_bytes,
            self.sent_bytes,
            self.request,
            self.user_agent,
            self.ssl_cipher,
            self.ssl_protocol,
        )
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Dispatched { ip, port } => write!(f, "{ip}:{port}"),
            Backend::NotDispatched => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.url, self.protocol)
    }
}
