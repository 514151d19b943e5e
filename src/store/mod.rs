//! Record persistence
//!
//! This module owns the SQLite-backed record table and exposes the
//! list/insert/update/delete operations the dispatcher calls.

pub mod records;

pub use records::{Record, RecordStore, StoreError};
