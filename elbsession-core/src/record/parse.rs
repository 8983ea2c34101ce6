use crate::record::{
    Backend, Field, LogRecord, NOT_APPLICABLE, ParseError, RequestLine, TIMESTAMP_FORMAT, Timing,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt::Display;
use std::str::FromStr;

/// Parse one access-log line.
///
/// Values the formatter could not reproduce byte-for-byte (leading zeros,
/// explicit `+` signs, timestamps without six fractional digits) are rejected
/// rather than normalized.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut scanner = Scanner::new(line);

    let timestamp = parse_timestamp(scanner.token(Field::Timestamp)?)?;
    let elb_name = scanner.token(Field::ElbName)?.to_string();
    let (client_ip, client_port) = parse_client(scanner.token(Field::ClientIp)?)?;
    let backend = parse_backend(scanner.token(Field::Backend)?)?;

    let request_processing_time = timing(&mut scanner, Field::RequestProcessingTime)?;
    let backend_processing_time = timing(&mut scanner, Field::BackendProcessingTime)?;
    let response_processing_time = timing(&mut scanner, Field::ResponseProcessingTime)?;

    let elb_status_code = canonical(scanner.token(Field::ElbStatusCode)?, Field::ElbStatusCode)?;
    let backend_status_code = canonical(
        scanner.token(Field::BackendStatusCode)?,
        Field::BackendStatusCode,
    )?;
    let received_bytes = canonical(scanner.token(Field::ReceivedBytes)?, Field::ReceivedBytes)?;
    let sent_bytes = canonical(scanner.token(Field::SentBytes)?, Field::SentBytes)?;

    let request = scanner.request()?;

    let (user_agent, ssl_cipher, ssl_protocol) = parse_tail(scanner.rest())?;

    Ok(LogRecord {
        timestamp,
        elb_name,
        client_ip,
        client_port,
        backend,
        request_processing_time,
        backend_processing_time,
        response_processing_time,
        elb_status_code,
        backend_status_code,
        received_bytes,
        sent_bytes,
        request,
        user_agent: user_agent.to_string(),
        ssl_cipher: ssl_cipher.to_string(),
        ssl_protocol: ssl_protocol.to_string(),
    })
}

impl FromStr for LogRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

//-----------------------------------------------------------------------------
// Scanner
//-----------------------------------------------------------------------------

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Space-terminated, non-empty token.
    fn token(&mut self, field: Field) -> Result<&'a str, ParseError> {
        let (token, rest) = self
            .rest
            .split_once(' ')
            .ok_or(ParseError::MissingField { field })?;

        if token.is_empty() {
            return Err(ParseError::MissingField { field });
        }

        self.rest = rest;
        Ok(token)
    }

    /// `"METHOD URL PROTOCOL" `, up to the user agent's opening quote.
    ///
    /// Method and URL end at a space and may contain quotes. The protocol is
    /// either `- ` or a space-free token closed by the last quote before the
    /// next space.
    fn request(&mut self) -> Result<RequestLine, ParseError> {
        if self.rest.is_empty() {
            return Err(ParseError::MissingField {
                field: Field::RequestMethod,
            });
        }

        let body = self.rest.strip_prefix('"').ok_or(ParseError::ExpectedQuote {
            field: Field::RequestMethod,
        })?;
        let (method, body) = body.split_once(' ').ok_or(ParseError::MissingField {
            field: Field::RequestUrl,
        })?;
        let (url, body) = body.split_once(' ').ok_or(ParseError::MissingField {
            field: Field::RequestProtocol,
        })?;

        let (protocol, rest) = match body.strip_prefix("- \" ") {
            Some(rest) => ("- ", rest),
            None => closed_protocol(body)?,
        };

        if method.is_empty() {
            return Err(ParseError::MissingField {
                field: Field::RequestMethod,
            });
        }
        if url.is_empty() {
            return Err(ParseError::MissingField {
                field: Field::RequestUrl,
            });
        }

        self.rest = rest;
        Ok(RequestLine {
            method: method.to_string(),
            url: url.to_string(),
            protocol: protocol.to_string(),
        })
    }

    fn rest(&self) -> &'a str {
        self.rest
    }
}

//-----------------------------------------------------------------------------
// Field parsers
//-----------------------------------------------------------------------------

/// Parse a number and insist that it prints back to the same token.
fn canonical<T>(token: &str, field: Field) -> Result<T, ParseError>
where
    T: FromStr + Display,
{
    token
        .parse::<T>()
        .ok()
        .filter(|value| value.to_string() == token)
        .ok_or_else(|| ParseError::invalid(field, token))
}

fn timing(scanner: &mut Scanner<'_>, field: Field) -> Result<Timing, ParseError> {
    let token = scanner.token(field)?;
    Timing::parse(token).ok_or_else(|| ParseError::invalid(field, token))
}

fn parse_timestamp(token: &str) -> Result<DateTime<Utc>, ParseError> {
    let timestamp = NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ParseError::invalid(Field::Timestamp, token))?;

    if timestamp.format(TIMESTAMP_FORMAT).to_string() != token {
        return Err(ParseError::invalid(Field::Timestamp, token));
    }

    Ok(timestamp)
}

/// `ip:port`, split on the last colon so IPv6 addresses survive.
fn split_endpoint(
    token: &str,
    ip_field: Field,
    port_field: Field,
) -> Result<(String, u16), ParseError> {
    let (ip, port) = token
        .rsplit_once(':')
        .ok_or(ParseError::MissingField { field: port_field })?;

    if ip.is_empty() {
        return Err(ParseError::MissingField { field: ip_field });
    }

    let port = canonical(port, port_field)?;
    Ok((ip.to_string(), port))
}

fn parse_client(token: &str) -> Result<(String, u16), ParseError> {
    split_endpoint(token, Field::ClientIp, Field::ClientPort)
}

fn parse_backend(token: &str) -> Result<Backend, ParseError> {
    if token == NOT_APPLICABLE {
        return Ok(Backend::NotDispatched);
    }

    let (ip, port) = split_endpoint(token, Field::Backend, Field::Backend)
        .map_err(|_| ParseError::invalid(Field::Backend, token))?;
    Ok(Backend::Dispatched { ip, port })
}

/// Split `PROTOCOL" rest` into the protocol and what follows the space.
fn closed_protocol(body: &str) -> Result<(&str, &str), ParseError> {
    let (token, rest) = match body.split_once(' ') {
        Some((token, rest)) => (token, Some(rest)),
        None => (body, None),
    };

    match (token.strip_suffix('"'), rest) {
        (Some(protocol), Some(rest)) => Ok((protocol, rest)),
        (Some(_), None) => Err(ParseError::MissingField {
            field: Field::UserAgent,
        }),
        (None, _) => match token.rfind('"') {
            Some(quote) => Err(ParseError::TrailingInput {
                field: Field::RequestProtocol,
                rest: body[quote + 1..].to_string(),
            }),
            None => Err(ParseError::UnterminatedQuote {
                field: Field::RequestMethod,
            }),
        },
    }
}

/// `"user agent" ssl_cipher ssl_protocol`, read from the right because the
/// user agent may contain spaces and quotes.
fn parse_tail(tail: &str) -> Result<(&str, &str, &str), ParseError> {
    let (head, ssl_protocol) = tail.rsplit_once(' ').ok_or(ParseError::MissingField {
        field: Field::SslCipher,
    })?;
    let (head, ssl_cipher) = head.rsplit_once(' ').ok_or(ParseError::MissingField {
        field: Field::SslCipher,
    })?;

    for (field, token) in [
        (Field::SslCipher, ssl_cipher),
        (Field::SslProtocol, ssl_protocol),
    ] {
        if token.is_empty() {
            return Err(ParseError::MissingField { field });
        }
        if token.contains('"') {
            return Err(ParseError::UnterminatedQuote {
                field: Field::UserAgent,
            });
        }
    }

    let body = head.strip_prefix('"').ok_or(ParseError::ExpectedQuote {
        field: Field::UserAgent,
    })?;
    let user_agent = body.strip_suffix('"').ok_or(ParseError::UnterminatedQuote {
        field: Field::UserAgent,
    })?;

    Ok((user_agent, ssl_cipher, ssl_protocol))
}
