//! Roster - Record CRUD over raw HTTP
//!
//! Core library for the request-handling and persistence pipeline:
//! raw bytes in, a record store operation, a JSON response out.

pub mod api;
pub mod config;
pub mod http;
pub mod server;
pub mod store;
