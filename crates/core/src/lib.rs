//! Domain logic for the rollcall attendance service.
//!
//! Pure functions and types only — no database access, no I/O. The matcher,
//! status classifier, and summary math live here so they can be unit tested
//! without a running Postgres.

pub mod attendance;
pub mod error;
pub mod matcher;
pub mod summary;
pub mod types;
pub mod validation;
