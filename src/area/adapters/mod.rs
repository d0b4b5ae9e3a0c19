//! Adapters implementing the message area ports.
//!
//! - [`memory`]: thread-safe in-memory implementations for tests and
//!   embedders without a database
//! - [`postgres`]: Diesel-backed `PostgreSQL` implementations

pub mod memory;
pub mod postgres;
