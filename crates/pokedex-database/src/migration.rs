//! Schema migrations for the catalog cache.

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use tracing::{debug, info};

use pokedex_core::error::{AppError, ErrorKind};

/// Migrations embedded from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the cache schema up to date. Safe to call on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    debug!(available = MIGRATOR.iter().count(), "Applying catalog schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to migrate catalog schema: {e}"),
            e,
        )
    })?;

    info!("Catalog schema is up to date");
    Ok(())
}
