//! Application setting model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Application setting entity, one row per unique key
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub id: i32,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for creating or updating a setting by key
#[derive(Debug, Deserialize)]
pub struct UpsertSettingRequest {
    pub key: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// Response for setting lookups
#[derive(Debug, Serialize)]
pub struct SettingResponse {
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
}

impl From<Setting> for SettingResponse {
    fn from(setting: Setting) -> Self {
        SettingResponse {
            key: setting.key,
            value: setting.value,
            description: setting.description,
        }
    }
}
