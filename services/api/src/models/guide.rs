//! Guide model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Guide entity as stored in the `guides` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Guide {
    pub id: i32,
    pub url: String,
    pub category: String,
    pub submitted_at: DateTime<Utc>,
}

/// New guide submission payload
#[derive(Debug, Clone)]
pub struct NewGuide {
    pub url: String,
    pub category: String,
}

/// Request for guide submission
#[derive(Debug, Deserialize)]
pub struct CreateGuideRequest {
    pub url: Option<String>,
    pub category: Option<String>,
}

/// Query parameters for guide listing
#[derive(Debug, Clone, Deserialize)]
pub struct GuideQuery {
    /// Filter by exact category; the literal `all` means unfiltered
    pub category: Option<String>,
}
