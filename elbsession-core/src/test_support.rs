use crate::record::{Backend, LogRecord, RequestLine, Timing};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 7, 22, 9, 0, 0).unwrap()
}

/// A dispatched GET from `client` at `base_time() + offset_micros`.
pub(crate) fn record_at_micros(client: &str, offset_micros: i64, url: &str) -> LogRecord {
    LogRecord {
        timestamp: base_time() + TimeDelta::microseconds(offset_micros),
        elb_name: "marketpalce-shop".to_string(),
        client_ip: client.to_string(),
        client_port: 40000,
        backend: Backend::Dispatched {
            ip: "10.0.4.227".to_string(),
            port: 80,
        },
        request_processing_time: Timing::from_seconds(0.000025),
        backend_processing_time: Timing::from_seconds(0.003448),
        response_processing_time: Timing::from_seconds(0.000018),
        elb_status_code: 200,
        backend_status_code: 200,
        received_bytes: 0,
        sent_bytes: 2048,
        request: RequestLine {
            method: "GET".to_string(),
            url: url.to_string(),
            protocol: "HTTP/1.1".to_string(),
        },
        user_agent: "curl/7.38.0".to_string(),
        ssl_cipher: "ECDHE-RSA-AES128-SHA".to_string(),
        ssl_protocol: "TLSv1".to_string(),
    }
}

pub(crate) fn record_at(client: &str, offset_seconds: i64, url: &str) -> LogRecord {
    record_at_micros(client, offset_seconds * 1_000_000, url)
}
