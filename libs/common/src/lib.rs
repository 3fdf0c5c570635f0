//! Common library for the community content backend
//!
//! This crate provides the infrastructure shared by the service binaries:
//! database connectivity, the database error types, and the idempotent
//! schema bootstrap.

pub mod database;
pub mod error;
pub mod schema;
