use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::api;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::store::RecordStore;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    store: RecordStore,
    max_request_bytes: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

/// What a completed read phase produced.
enum ReadOutcome {
    /// A parsed request, ready for dispatch
    Request(Request),
    /// A protocol-level rejection to answer without dispatching
    Reject(Response),
    /// The peer closed without sending anything
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, store: RecordStore, max_request_bytes: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            store,
            max_request_bytes,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request: read, dispatch, write, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => {
                        tracing::info!(
                            method = ?req.method,
                            path = %req.path,
                            version = %req.version,
                            "Received request"
                        );
                        self.state = ConnectionState::Processing(req);
                    }
                    ReadOutcome::Reject(response) => {
                        self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                    }
                    ReadOutcome::Closed => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = api::dispatch(&self.store, req).await;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // One request per connection; no keep-alive.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer parses as a complete request, the size
    /// cap is hit, or the peer stops sending.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer, false) {
                Ok(request) => return Ok(ReadOutcome::Request(request)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(err) => {
                    tracing::debug!(error = ?err, "Rejecting unparseable request");
                    return Ok(ReadOutcome::Reject(Response::bad_request()));
                }
            }

            if self.buffer.len() >= self.max_request_bytes {
                tracing::debug!(
                    bytes = self.buffer.len(),
                    cap = self.max_request_bytes,
                    "Rejecting oversized request"
                );
                return Ok(ReadOutcome::Reject(Response::payload_too_large()));
            }

            // Read more data
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending a request
                    return Ok(ReadOutcome::Closed);
                }

                // Peer finished sending: parse what we have, promoting
                // Incomplete to its malformed counterpart.
                return match parse_request(&self.buffer, true) {
                    Ok(request) => Ok(ReadOutcome::Request(request)),
                    Err(err) => {
                        tracing::debug!(error = ?err, "Rejecting truncated request");
                        Ok(ReadOutcome::Reject(Response::bad_request()))
                    }
                };
            }
        }
    }
}
