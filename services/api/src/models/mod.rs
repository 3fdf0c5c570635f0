//! API models for request and response payloads

pub mod feedback;
pub mod guide;
pub mod product;
pub mod project_data;
pub mod prompt;
pub mod setting;
pub mod showcase;
pub mod user;

// Re-export for convenience
pub use feedback::{CreateFeedbackRequest, Feedback, FeedbackQuery};
pub use guide::{CreateGuideRequest, Guide, GuideQuery, NewGuide};
pub use product::{CreateProductRequest, NewProduct, Product, ProductResponse};
pub use project_data::{CreateProjectDataRequest, NewProjectData, ProjectData};
pub use prompt::{
    CategoryCount, CreatePromptRequest, NewPrompt, Prompt, PromptQuery, PromptResponse, PromptSort,
};
pub use setting::{Setting, SettingResponse, UpsertSettingRequest};
pub use showcase::{NewShowcaseProject, ShowcaseProject, ShowcaseProjectResponse};
pub use user::{CreateUserRequest, NewUser, User, UserResponse};
