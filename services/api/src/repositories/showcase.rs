//! Showcase project repository for database operations

use sqlx::{PgPool, Row};
use tracing::info;

use crate::error::RepositoryResult;
use crate::models::{NewShowcaseProject, ShowcaseProject};

/// Showcase project repository
#[derive(Clone)]
pub struct ShowcaseRepository {
    pool: PgPool,
}

impl ShowcaseRepository {
    /// Create a new showcase repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new showcase project
    pub async fn create(&self, new_project: &NewShowcaseProject) -> RepositoryResult<ShowcaseProject> {
        info!("Creating new showcase project: {}", new_project.title);

        let row = sqlx::query(
            r#"
            INSERT INTO showcase_projects (title, category, description, link, image_filename)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, description, link, image_filename, submitted_at
            "#,
        )
        .bind(&new_project.title)
        .bind(&new_project.category)
        .bind(&new_project.description)
        .bind(&new_project.link)
        .bind(&new_project.image_filename)
        .fetch_one(&self.pool)
        .await?;

        Ok(ShowcaseProject {
            id: row.get("id"),
            title: row.get("title"),
            category: row.get("category"),
            description: row.get("description"),
            link: row.get("link"),
            image_filename: row.get("image_filename"),
            submitted_at: row.get("submitted_at"),
        })
    }

    /// List showcase projects, newest submission first
    pub async fn list_recent(&self) -> RepositoryResult<Vec<ShowcaseProject>> {
        let projects = sqlx::query_as::<_, ShowcaseProject>(
            r#"
            SELECT id, title, category, description, link, image_filename, submitted_at
            FROM showcase_projects
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_created_projects_list_newest_first() {
        let pool = test_pool().await;
        let repository = ShowcaseRepository::new(pool);
        let suffix = unique_suffix();

        let first = repository
            .create(&NewShowcaseProject {
                title: format!("First {}", suffix),
                category: "Web Development".to_string(),
                description: "The earlier submission.".to_string(),
                link: None,
                image_filename: None,
            })
            .await
            .expect("create first");

        let second = repository
            .create(&NewShowcaseProject {
                title: format!("Second {}", suffix),
                category: "Automation".to_string(),
                description: "The later submission.".to_string(),
                link: Some("https://example.com".to_string()),
                image_filename: Some("shot.png".to_string()),
            })
            .await
            .expect("create second");

        let listed = repository.list_recent().await.expect("list");
        let first_pos = listed.iter().position(|p| p.id == first.id).expect("first");
        let second_pos = listed
            .iter()
            .position(|p| p.id == second.id)
            .expect("second");
        assert!(second_pos < first_pos, "newest submission comes first");
    }
}
