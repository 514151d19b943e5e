//! HTTP protocol implementation.
//!
//! This module implements the minimal HTTP/1.1 subset the service
//! speaks: one request per connection, no keep-alive, no chunked
//! transfer, headers read but not interpreted.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming requests from byte buffers
//! - **`request`**: Request representation (method, path, JSON payload)
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Bounded read loop until the buffer parses
//!        └──────┬──────┘
//!               │ Request received (or protocol rejection)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch to the record store
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```
//!
//! # Example
//!
//! ```ignore
//! use roster::http::connection::Connection;
//! use roster::store::RecordStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = RecordStore::init("test.db")?;
//!     let listener = TcpListener::bind("127.0.0.1:3999").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let store = store.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, store, 4096);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
