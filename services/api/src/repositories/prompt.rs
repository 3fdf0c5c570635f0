//! Prompt repository for database operations

use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use tracing::info;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{CategoryCount, NewPrompt, Prompt, PromptSort};

/// Prompt repository
#[derive(Clone)]
pub struct PromptRepository {
    pool: PgPool,
}

impl PromptRepository {
    /// Create a new prompt repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new prompt
    pub async fn create(&self, new_prompt: &NewPrompt) -> RepositoryResult<Prompt> {
        info!("Creating new prompt: {}", new_prompt.title);

        let row = sqlx::query(
            r#"
            INSERT INTO prompts (title, category, description, prompt_text, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, description, prompt_text, rating,
                      usage_count, created_at, updated_at
            "#,
        )
        .bind(&new_prompt.title)
        .bind(&new_prompt.category)
        .bind(&new_prompt.description)
        .bind(&new_prompt.prompt_text)
        .bind(new_prompt.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "Database integrity error."))?;

        Ok(Prompt {
            id: row.get("id"),
            title: row.get("title"),
            category: row.get("category"),
            description: row.get("description"),
            prompt_text: row.get("prompt_text"),
            rating: row.get("rating"),
            usage_count: row.get("usage_count"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// List prompts with optional category filter, optional
    /// case-insensitive search on title/description, and an explicit sort
    pub async fn list(
        &self,
        category: Option<&str>,
        term: Option<&str>,
        sort: PromptSort,
    ) -> RepositoryResult<Vec<Prompt>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, title, category, description, prompt_text, rating, \
             usage_count, created_at, updated_at FROM prompts WHERE 1=1",
        );

        if let Some(category) = category {
            builder.push(" AND category = ").push_bind(category);
        }

        if let Some(term) = term {
            let pattern = format!("%{}%", term);
            builder
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        builder.push(sort.order_clause());

        let prompts = builder
            .build_query_as::<Prompt>()
            .fetch_all(&self.pool)
            .await?;

        Ok(prompts)
    }

    /// Count prompts per category, ordered by category name
    pub async fn categories(&self) -> RepositoryResult<Vec<CategoryCount>> {
        let rows = sqlx::query(
            r#"
            SELECT category AS name, COUNT(*) AS count
            FROM prompts
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryCount {
                name: row.get("name"),
                count: row.get("count"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};
    use rust_decimal::Decimal;

    async fn insert_prompt(pool: &PgPool, title: &str, category: &str, usage_count: i32) {
        sqlx::query(
            r#"
            INSERT INTO prompts (title, category, prompt_text, usage_count)
            VALUES ($1, $2, 'Prompt body.', $3)
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(usage_count)
        .execute(pool)
        .await
        .expect("insert prompt fixture");
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_popularity_sort_orders_by_usage_count_descending() {
        let pool = test_pool().await;
        let repository = PromptRepository::new(pool.clone());
        let category = format!("cat_{}", unique_suffix());

        insert_prompt(&pool, "low", &category, 5).await;
        insert_prompt(&pool, "high", &category, 50).await;
        insert_prompt(&pool, "mid", &category, 20).await;

        let prompts = repository
            .list(Some(&category), None, PromptSort::Popularity)
            .await
            .expect("list");

        let counts: Vec<i32> = prompts.iter().map(|p| p.usage_count).collect();
        assert_eq!(counts, vec![50, 20, 5]);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_term_filter_matches_title_and_description() {
        let pool = test_pool().await;
        let repository = PromptRepository::new(pool.clone());
        let suffix = unique_suffix();
        let category = format!("cat_{}", suffix);
        let needle = format!("needle{}", suffix);

        sqlx::query(
            r#"
            INSERT INTO prompts (title, category, description, prompt_text)
            VALUES ($1, $2, $3, 'Prompt body.')
            "#,
        )
        .bind(format!("Title with {}", needle.to_uppercase()))
        .bind(&category)
        .bind(Option::<String>::None)
        .execute(&pool)
        .await
        .expect("insert");

        insert_prompt(&pool, "unrelated", &category, 0).await;

        let matching = repository
            .list(Some(&category), Some(&needle), PromptSort::Date)
            .await
            .expect("list");
        assert_eq!(matching.len(), 1);

        let all = repository
            .list(Some(&category), None, PromptSort::Date)
            .await
            .expect("list");
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_create_returns_defaulted_usage_count() {
        let pool = test_pool().await;
        let repository = PromptRepository::new(pool);
        let suffix = unique_suffix();

        let prompt = repository
            .create(&NewPrompt {
                title: format!("Unit Test Helper {}", suffix),
                category: "Coding".to_string(),
                description: None,
                prompt_text: "Write unit tests for the following function.".to_string(),
                rating: Some(Decimal::new(42, 1)),
            })
            .await
            .expect("create");

        assert!(prompt.id > 0);
        assert_eq!(prompt.usage_count, 0);
        assert_eq!(prompt.rating, Some(Decimal::new(42, 1)));
    }
}
