use serde::Deserialize;

use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// More bytes may still arrive; retry after the next read.
    Incomplete,
    /// The request line could not be tokenized.
    MalformedRequest,
    /// A body-carrying method without a parseable JSON document.
    MalformedPayload,
}

/// Parses a raw request buffer into a [`Request`].
///
/// `at_eof` marks that the peer has finished sending: conditions that
/// would otherwise wait for more bytes are promoted to their malformed
/// counterpart, since nothing more is coming.
pub fn parse_request(buf: &[u8], at_eof: bool) -> Result<Request, ParseError> {
    // Request line: up to the first newline, or the whole buffer once
    // the peer has shut down its write half.
    let line_bytes = match buf.iter().position(|&b| b == b'\n') {
        Some(i) => &buf[..i],
        None if at_eof && !buf.is_empty() => buf,
        None => return Err(ParseError::Incomplete),
    };

    let line = std::str::from_utf8(line_bytes).map_err(|_| ParseError::MalformedRequest)?;
    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::MalformedRequest)?;
    let path = parts.next().ok_or(ParseError::MalformedRequest)?;
    let version = parts.next().ok_or(ParseError::MalformedRequest)?;

    let method = Method::from_str(method_str);

    // GET and unrecognized verbs never carry a payload.
    let payload = match method {
        Some(m) if m.expects_payload() => Some(parse_payload(buf, at_eof)?),
        _ => None,
    };

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        payload,
    })
}

fn parse_payload(buf: &[u8], at_eof: bool) -> Result<serde_json::Value, ParseError> {
    // One rule for every body-carrying method: the payload is the first
    // JSON document starting at the first '{' in the buffer. Bytes
    // trailing the document are ignored.
    let start = match buf.iter().position(|&b| b == b'{') {
        Some(i) => i,
        None if at_eof => return Err(ParseError::MalformedPayload),
        None => return Err(ParseError::Incomplete),
    };

    let mut de = serde_json::Deserializer::from_slice(&buf[start..]);
    match serde_json::Value::deserialize(&mut de) {
        Ok(value) => Ok(value),
        Err(err) if err.is_eof() && !at_eof => Err(ParseError::Incomplete),
        Err(_) => Err(ParseError::MalformedPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req, false).unwrap();

        assert_eq!(parsed.method, Some(Method::GET));
        assert_eq!(parsed.path, "/");
        assert!(parsed.payload.is_none());
    }
}
