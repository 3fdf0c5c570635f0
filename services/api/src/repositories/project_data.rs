//! Project data repository for database operations

use sqlx::{PgPool, Row};

use crate::error::RepositoryResult;
use crate::models::{NewProjectData, ProjectData};

/// Project data repository
#[derive(Clone)]
pub struct ProjectDataRepository {
    pool: PgPool,
}

impl ProjectDataRepository {
    /// Create a new project data repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new project data entry
    pub async fn create(&self, new_entry: &NewProjectData) -> RepositoryResult<ProjectData> {
        let row = sqlx::query(
            r#"
            INSERT INTO projects_data (name, description, url)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, url
            "#,
        )
        .bind(&new_entry.name)
        .bind(&new_entry.description)
        .bind(&new_entry.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(ProjectData {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            url: row.get("url"),
        })
    }

    /// List all project data entries
    pub async fn list_all(&self) -> RepositoryResult<Vec<ProjectData>> {
        let entries = sqlx::query_as::<_, ProjectData>(
            r#"
            SELECT id, name, description, url
            FROM projects_data
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
