//! Feedback model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Feedback entity as stored in the `feedback` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Feedback {
    pub id: i32,
    pub feedback_type: String,
    pub summary: String,
    pub details: String,
    pub email: Option<String>,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

/// Request for feedback submission
#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub feedback_type: Option<String>,
    pub summary: Option<String>,
    pub details: Option<String>,
    pub email: Option<String>,
}

/// Query parameters for feedback listing
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackQuery {
    /// Filter by feedback type
    #[serde(rename = "type")]
    pub feedback_type: Option<String>,
}
