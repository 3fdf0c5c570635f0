//! Showcase project model and related payloads

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::upload;

/// Showcase project entity as stored in the `showcase_projects` table
#[derive(Debug, Clone, FromRow)]
pub struct ShowcaseProject {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: Option<String>,
    pub image_filename: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// New showcase project payload; `image_filename` is only set after the
/// uploaded file passed the extension allow-list and was stored
#[derive(Debug, Clone)]
pub struct NewShowcaseProject {
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: Option<String>,
    pub image_filename: Option<String>,
}

/// Response for showcase project listings, with the computed image URL
#[derive(Debug, Serialize)]
pub struct ShowcaseProjectResponse {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub image_filename: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<ShowcaseProject> for ShowcaseProjectResponse {
    fn from(project: ShowcaseProject) -> Self {
        let image_url = project
            .image_filename
            .as_deref()
            .map(|filename| format!("{}/{}", upload::SHOWCASE_IMAGE_URL_PATH, filename));

        ShowcaseProjectResponse {
            id: project.id,
            title: project.title,
            category: project.category,
            description: project.description,
            link: project.link,
            image_url,
            image_filename: project.image_filename,
            submitted_at: project.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project(image_filename: Option<&str>) -> ShowcaseProject {
        ShowcaseProject {
            id: 3,
            title: "Automated Code Reviewer".to_string(),
            category: "Automation".to_string(),
            description: "Reviews code submissions for common errors.".to_string(),
            link: None,
            image_filename: image_filename.map(str::to_string),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_url_is_computed_from_filename() {
        let response = ShowcaseProjectResponse::from(sample_project(Some("shot.png")));
        assert_eq!(
            response.image_url.as_deref(),
            Some("/uploads/showcase_images/shot.png")
        );
    }

    #[test]
    fn test_image_url_is_absent_without_filename() {
        let response = ShowcaseProjectResponse::from(sample_project(None));
        assert_eq!(response.image_url, None);
        assert_eq!(response.image_filename, None);
    }
}
