//! Database migration runner
//!
//! Migrations live in the `migrations/` directory at the workspace root, one
//! `{version}_{name}.sql` file per change, and are applied with sqlx's
//! embedded migrator at startup.

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending database migrations.
///
/// # Errors
///
/// Returns an error if a migration file is malformed or fails to execute; a
/// failed migration is rolled back where the statements allow it.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("running database migrations");

    match sqlx::migrate!("../migrations").run(pool).await {
        Ok(()) => {
            info!("database migrations complete");
            Ok(())
        }
        Err(e) => {
            warn!("migration failed: {}", e);
            Err(e)
        }
    }
}
