//! Database utilities
//!
//! - `pool`: PostgreSQL connection pool creation and health check
//! - `migrations`: sqlx migration runner

pub mod migrations;
pub mod pool;
