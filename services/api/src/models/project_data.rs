//! Generic project data model and related payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Project data entry as stored in the `projects_data` table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProjectData {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// New project data payload
#[derive(Debug, Clone)]
pub struct NewProjectData {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Request for project data submission
#[derive(Debug, Deserialize)]
pub struct CreateProjectDataRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}
