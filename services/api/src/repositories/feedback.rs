//! Feedback repository for database operations

use sqlx::{PgPool, Row};

use crate::error::RepositoryResult;
use crate::models::Feedback;

/// Feedback repository
#[derive(Clone)]
pub struct FeedbackRepository {
    pool: PgPool,
}

impl FeedbackRepository {
    /// Create a new feedback repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new feedback entry; status defaults to `submitted`
    pub async fn create(
        &self,
        feedback_type: &str,
        summary: &str,
        details: &str,
        email: Option<&str>,
    ) -> RepositoryResult<Feedback> {
        let row = sqlx::query(
            r#"
            INSERT INTO feedback (feedback_type, summary, details, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, feedback_type, summary, details, email, status, submitted_at
            "#,
        )
        .bind(feedback_type)
        .bind(summary)
        .bind(details)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(Feedback {
            id: row.get("id"),
            feedback_type: row.get("feedback_type"),
            summary: row.get("summary"),
            details: row.get("details"),
            email: row.get("email"),
            status: row.get("status"),
            submitted_at: row.get("submitted_at"),
        })
    }

    /// List feedback entries, newest first, optionally filtered by type
    pub async fn list(&self, feedback_type: Option<&str>) -> RepositoryResult<Vec<Feedback>> {
        let entries = match feedback_type {
            Some(feedback_type) => {
                sqlx::query_as::<_, Feedback>(
                    r#"
                    SELECT id, feedback_type, summary, details, email, status, submitted_at
                    FROM feedback
                    WHERE feedback_type = $1
                    ORDER BY id DESC
                    "#,
                )
                .bind(feedback_type)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Feedback>(
                    r#"
                    SELECT id, feedback_type, summary, details, email, status, submitted_at
                    FROM feedback
                    ORDER BY id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_created_feedback_defaults_to_submitted() {
        let pool = test_pool().await;
        let repository = FeedbackRepository::new(pool);
        // feedback_type is VARCHAR(20); keep the unique suffix short
        let feedback_type = format!("bug_{}", unique_suffix() % 1_000_000_000_000);

        let feedback = repository
            .create(&feedback_type, "Broken link", "The docs link 404s.", None)
            .await
            .expect("create");

        assert!(feedback.id > 0);
        assert_eq!(feedback.status, "submitted");
        assert_eq!(feedback.email, None);

        let listed = repository.list(Some(&feedback_type)).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].summary, "Broken link");
    }
}
