//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::{
    FeedbackRepository, GuideRepository, ProductRepository, ProjectDataRepository,
    PromptRepository, SettingRepository, ShowcaseRepository, UserRepository,
};
use crate::upload::UploadConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub product_repository: ProductRepository,
    pub setting_repository: SettingRepository,
    pub prompt_repository: PromptRepository,
    pub showcase_repository: ShowcaseRepository,
    pub guide_repository: GuideRepository,
    pub feedback_repository: FeedbackRepository,
    pub project_data_repository: ProjectDataRepository,
    pub upload: UploadConfig,
}

impl AppState {
    /// Build the application state from a connection pool and upload
    /// configuration
    pub fn new(pool: PgPool, upload: UploadConfig) -> Self {
        AppState {
            user_repository: UserRepository::new(pool.clone()),
            product_repository: ProductRepository::new(pool.clone()),
            setting_repository: SettingRepository::new(pool.clone()),
            prompt_repository: PromptRepository::new(pool.clone()),
            showcase_repository: ShowcaseRepository::new(pool.clone()),
            guide_repository: GuideRepository::new(pool.clone()),
            feedback_repository: FeedbackRepository::new(pool.clone()),
            project_data_repository: ProjectDataRepository::new(pool.clone()),
            db_pool: pool,
            upload,
        }
    }
}
