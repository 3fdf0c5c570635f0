//! Application setting repository for database operations

use sqlx::{PgPool, Row};
use tracing::info;

use crate::error::RepositoryResult;
use crate::models::Setting;

/// Application setting repository
#[derive(Clone)]
pub struct SettingRepository {
    pool: PgPool,
}

impl SettingRepository {
    /// Create a new setting repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a setting by its unique key
    pub async fn find_by_key(&self, key: &str) -> RepositoryResult<Option<Setting>> {
        let row = sqlx::query(
            r#"
            SELECT id, key, value, description, created_at, updated_at
            FROM application_settings
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Self::map_row))
    }

    /// Create the setting if absent, otherwise update it in place
    ///
    /// Returns the stored setting and whether it was created. An update
    /// without a new description keeps the existing one.
    pub async fn upsert(
        &self,
        key: &str,
        value: Option<&str>,
        description: Option<&str>,
    ) -> RepositoryResult<(Setting, bool)> {
        let existing = self.find_by_key(key).await?;

        if existing.is_some() {
            info!("Updating setting: {}", key);

            let row = sqlx::query(
                r#"
                UPDATE application_settings
                SET value = $2,
                    description = COALESCE($3, description),
                    updated_at = now()
                WHERE key = $1
                RETURNING id, key, value, description, created_at, updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(description)
            .fetch_one(&self.pool)
            .await?;

            Ok((Self::map_row(row), false))
        } else {
            info!("Creating setting: {}", key);

            let row = sqlx::query(
                r#"
                INSERT INTO application_settings (key, value, description)
                VALUES ($1, $2, $3)
                RETURNING id, key, value, description, created_at, updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(description)
            .fetch_one(&self.pool)
            .await?;

            Ok((Self::map_row(row), true))
        }
    }

    fn map_row(row: sqlx::postgres::PgRow) -> Setting {
        Setting {
            id: row.get("id"),
            key: row.get("key"),
            value: row.get("value"),
            description: row.get("description"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
