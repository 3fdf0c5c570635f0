//! Shared helpers for database-backed tests
//!
//! These tests need a live PostgreSQL reachable through `DATABASE_URL`
//! and are ignored by default; run them with `cargo test -- --ignored`.

use common::database::{DatabaseConfig, init_pool};
use common::schema::ensure_schema;
use sqlx::PgPool;

/// Connect to the test database and make sure the schema exists
pub async fn test_pool() -> PgPool {
    let config = DatabaseConfig::from_env().expect("database config");
    let pool = init_pool(&config).await.expect("connect to test database");
    ensure_schema(&pool).await.expect("ensure schema");
    pool
}

/// A suffix unique enough to keep fixture rows from colliding across
/// test runs against a shared database
pub fn unique_suffix() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_nanos()
}
