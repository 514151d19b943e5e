//! Connection intake
//!
//! Accepts connections and hands each one to the HTTP connection
//! handler, bounding how many are in flight at once.

pub mod listener;
