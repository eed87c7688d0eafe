//! Local catalog store: the position-ordered `pokemon` table.

use sqlx::SqlitePool;
use tracing::debug;

use pokedex_core::result::AppResult;
use pokedex_entity::PokemonSummary;

/// Repository for the cached catalog list.
#[derive(Debug, Clone)]
pub struct PokemonRepository {
    pool: SqlitePool,
}

impl PokemonRepository {
    /// Create a new pokemon repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or replace every item, keyed on `name`, in one transaction.
    pub async fn upsert_all(&self, items: &[PokemonSummary]) -> AppResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        for item in items {
            sqlx::query(
                "INSERT INTO pokemon (name, url, position) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(name) DO UPDATE SET url = excluded.url, position = excluded.position",
            )
            .bind(&item.name)
            .bind(&item.url)
            .bind(item.position)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(count = items.len(), "Upserted pokemon rows");
        Ok(())
    }

    /// Rows with `position >= offset`, ascending by position, at most `limit`.
    pub async fn read_range(&self, limit: i64, offset: i64) -> AppResult<Vec<PokemonSummary>> {
        let rows = sqlx::query_as::<_, PokemonSummary>(
            "SELECT name, url, position FROM pokemon \
             WHERE position >= ?1 ORDER BY position ASC LIMIT ?2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Find a cached entry by name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<PokemonSummary>> {
        let row = sqlx::query_as::<_, PokemonSummary>(
            "SELECT name, url, position FROM pokemon WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Number of cached entries.
    pub async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Highest cached position, `None` when the table is empty.
    pub async fn max_position(&self) -> AppResult<Option<i64>> {
        let max = sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(position) FROM pokemon")
            .fetch_one(&self.pool)
            .await?;
        Ok(max)
    }

    /// Delete every cached entry. Returns the number of rows removed.
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM pokemon")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Cleared pokemon cache");
        Ok(result.rows_affected())
    }
}
