//! Shared domain primitives for the punchlist service.
//!
//! Holds the pieces both the database layer and the HTTP layer depend on:
//! ID/timestamp type aliases, the domain error taxonomy, and the wire
//! format for timestamps.

pub mod error;
pub mod time;
pub mod types;
