//! Repository for the `settings` table (flat key/value store).

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::models::setting::Setting;

/// Column list for `settings` queries.
const COLUMNS: &str = "key, value, created_at, updated_at";

/// Provides data access for site settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// List every stored setting row.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// Read all stored settings as a key -> raw value map.
    pub async fn get_map(pool: &PgPool) -> Result<BTreeMap<String, String>, sqlx::Error> {
        let rows = Self::list(pool).await?;
        Ok(rows.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Read a single raw value by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a batch of key/value pairs in one transaction.
    ///
    /// Uses `ON CONFLICT (key) DO UPDATE` so repeated saves are idempotent.
    /// Values must already be validated/encoded by the settings codec.
    pub async fn upsert_many(pool: &PgPool, entries: &[(String, String)]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (key, value) in entries {
            sqlx::query(
                "INSERT INTO settings (key, value) VALUES ($1, $2) \
                 ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
