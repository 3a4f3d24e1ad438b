//! REST API for users and movies backed by PostgreSQL.
//!
//! Movie writes pass through a validation gate that reports every malformed
//! field at once; user writes only have their value types narrowed and rely on
//! the schema for completeness.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
