//! Guide repository for database operations

use sqlx::{PgPool, Row};
use tracing::info;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Guide, NewGuide};

/// Guide repository
#[derive(Clone)]
pub struct GuideRepository {
    pool: PgPool,
}

impl GuideRepository {
    /// Create a new guide repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new guide; resubmitting a known URL is a duplicate
    pub async fn create(&self, new_guide: &NewGuide) -> RepositoryResult<Guide> {
        info!("Creating new guide: {}", new_guide.url);

        let row = sqlx::query(
            r#"
            INSERT INTO guides (url, category)
            VALUES ($1, $2)
            RETURNING id, url, category, submitted_at
            "#,
        )
        .bind(&new_guide.url)
        .bind(&new_guide.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "This guide URL has already been submitted"))?;

        Ok(Guide {
            id: row.get("id"),
            url: row.get("url"),
            category: row.get("category"),
            submitted_at: row.get("submitted_at"),
        })
    }

    /// List guides, newest first, optionally filtered by category
    pub async fn list(&self, category: Option<&str>) -> RepositoryResult<Vec<Guide>> {
        let guides = match category {
            Some(category) => {
                sqlx::query_as::<_, Guide>(
                    r#"
                    SELECT id, url, category, submitted_at
                    FROM guides
                    WHERE category = $1
                    ORDER BY submitted_at DESC, id DESC
                    "#,
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Guide>(
                    r#"
                    SELECT id, url, category, submitted_at
                    FROM guides
                    ORDER BY submitted_at DESC, id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(guides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_duplicate_url_is_rejected() {
        let pool = test_pool().await;
        let repository = GuideRepository::new(pool);
        let url = format!("https://example.com/guide-{}", unique_suffix());

        let new_guide = NewGuide {
            url: url.clone(),
            category: "Getting Started".to_string(),
        };

        let guide = repository.create(&new_guide).await.expect("first create");
        assert!(guide.id > 0);

        let err = repository
            .create(&new_guide)
            .await
            .expect_err("second create is a duplicate");
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_category_filter() {
        let pool = test_pool().await;
        let repository = GuideRepository::new(pool);
        let suffix = unique_suffix();
        let category = format!("cat_{}", suffix);

        repository
            .create(&NewGuide {
                url: format!("https://example.com/a-{}", suffix),
                category: category.clone(),
            })
            .await
            .expect("create");

        let filtered = repository.list(Some(&category)).await.expect("list");
        assert_eq!(filtered.len(), 1);

        let none = repository
            .list(Some("no_such_category"))
            .await
            .expect("list");
        assert!(none.is_empty());
    }
}
