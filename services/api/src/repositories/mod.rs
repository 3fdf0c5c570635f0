//! Repositories for database operations
//!
//! One repository per entity, each constructed with an injected
//! connection pool. Unique-constraint violations surface as
//! `RepositoryError::Duplicate`; lookup misses as `Ok(None)`.

pub mod feedback;
pub mod guide;
pub mod product;
pub mod project_data;
pub mod prompt;
pub mod setting;
pub mod showcase;
pub mod user;

pub use feedback::FeedbackRepository;
pub use guide::GuideRepository;
pub use product::ProductRepository;
pub use project_data::ProjectDataRepository;
pub use prompt::PromptRepository;
pub use setting::SettingRepository;
pub use showcase::ShowcaseRepository;
pub use user::UserRepository;
