//! Request handlers, one module per resource.

pub mod comment;
pub mod project;
pub mod stats;
pub mod todo;
