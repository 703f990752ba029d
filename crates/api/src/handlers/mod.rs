//! HTTP request handlers, one module per resource.

pub mod attendance;
pub mod students;
