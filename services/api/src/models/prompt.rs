//! Prompt model, filtering and sorting payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Prompt entity as stored in the `prompts` table
#[derive(Debug, Clone, FromRow)]
pub struct Prompt {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub prompt_text: String,
    pub rating: Option<Decimal>,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New prompt creation payload with an already validated rating
#[derive(Debug, Clone)]
pub struct NewPrompt {
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub prompt_text: String,
    pub rating: Option<Decimal>,
}

/// Request for prompt creation
#[derive(Debug, Deserialize)]
pub struct CreatePromptRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub prompt_text: Option<String>,
    pub rating: Option<serde_json::Value>,
}

/// Query parameters for prompt listing
#[derive(Debug, Clone, Deserialize)]
pub struct PromptQuery {
    /// Filter by exact category
    pub category: Option<String>,
    /// Case-insensitive substring match on title or description
    pub term: Option<String>,
    /// Sort key; unrecognized values fall back to date
    pub sort_by: Option<String>,
}

/// Sort order for prompt listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSort {
    /// Newest first (default)
    Date,
    /// Highest usage count first
    Popularity,
    /// Alphabetical by title
    Title,
    /// Highest rating first
    Rating,
}

impl PromptSort {
    /// Parse the `sort_by` query parameter, falling back to `Date` for
    /// unrecognized values
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("popularity") => PromptSort::Popularity,
            Some("title") => PromptSort::Title,
            Some("rating") => PromptSort::Rating,
            _ => PromptSort::Date,
        }
    }

    /// The ORDER BY clause for this sort key
    pub fn order_clause(self) -> &'static str {
        match self {
            PromptSort::Date => " ORDER BY created_at DESC",
            PromptSort::Popularity => " ORDER BY usage_count DESC",
            PromptSort::Title => " ORDER BY title ASC",
            PromptSort::Rating => " ORDER BY rating DESC NULLS LAST",
        }
    }
}

/// Response for prompt listings; the rating is serialized as a decimal
/// string when present
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub prompt_text: String,
    pub rating: Option<String>,
    pub usage_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        PromptResponse {
            id: prompt.id,
            title: prompt.title,
            category: prompt.category,
            description: prompt.description,
            prompt_text: prompt.prompt_text,
            rating: prompt.rating.map(|r| r.to_string()),
            usage_count: prompt.usage_count,
            created_at: prompt.created_at,
        }
    }
}

/// Category name with the number of prompts filed under it
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_from_param() {
        assert_eq!(PromptSort::from_param(None), PromptSort::Date);
        assert_eq!(PromptSort::from_param(Some("date")), PromptSort::Date);
        assert_eq!(
            PromptSort::from_param(Some("popularity")),
            PromptSort::Popularity
        );
        assert_eq!(PromptSort::from_param(Some("title")), PromptSort::Title);
        assert_eq!(PromptSort::from_param(Some("rating")), PromptSort::Rating);
    }

    #[test]
    fn test_unrecognized_sort_falls_back_to_date() {
        assert_eq!(PromptSort::from_param(Some("bogus")), PromptSort::Date);
        assert_eq!(PromptSort::from_param(Some("")), PromptSort::Date);
    }

    #[test]
    fn test_order_clauses() {
        assert_eq!(
            PromptSort::Popularity.order_clause(),
            " ORDER BY usage_count DESC"
        );
        assert_eq!(PromptSort::Date.order_clause(), " ORDER BY created_at DESC");
        assert_eq!(PromptSort::Title.order_clause(), " ORDER BY title ASC");
        assert_eq!(
            PromptSort::Rating.order_clause(),
            " ORDER BY rating DESC NULLS LAST"
        );
    }

    #[test]
    fn test_rating_serializes_as_string() {
        let prompt = Prompt {
            id: 7,
            title: "Code Debugger".to_string(),
            category: "Debugging".to_string(),
            description: None,
            prompt_text: "Analyze the following code.".to_string(),
            rating: Some(Decimal::new(45, 1)),
            usage_count: 150,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = PromptResponse::from(prompt);
        assert_eq!(response.rating.as_deref(), Some("4.5"));
    }
}
