//! Request routing
//!
//! Maps a parsed request to a record store operation and turns the
//! outcome into a response payload.

pub mod dispatch;
pub mod payload;

pub use dispatch::dispatch;
