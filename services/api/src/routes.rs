//! API service routes
//!
//! Every create handler validates its required fields before touching the
//! database; repository errors carry their own taxonomy and map to status
//! codes in `ApiError::into_response`.

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    error::ApiError,
    models::{
        CreateFeedbackRequest, CreateGuideRequest, CreateProductRequest,
        CreateProjectDataRequest, CreatePromptRequest, CreateUserRequest, FeedbackQuery,
        GuideQuery, NewGuide, NewProduct, NewProjectData, NewPrompt, NewShowcaseProject, NewUser,
        ProductResponse, PromptQuery, PromptResponse, PromptSort, SettingResponse,
        ShowcaseProjectResponse, UpsertSettingRequest, UserResponse,
    },
    state::AppState,
    upload, validation,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
        .route("/products", post(add_product).get(list_products))
        .route("/settings", post(create_or_update_setting))
        .route("/settings/:key", get(get_setting))
        .route("/prompts", get(get_prompts).post(create_prompt))
        .route("/prompts/categories", get(get_prompt_categories))
        .route(
            "/showcase/projects",
            post(create_showcase_project).get(get_showcase_projects),
        )
        .route("/guides", post(create_guide).get(get_guides))
        .route("/feedback", post(create_feedback).get(get_feedback))
        .route("/submit_project_data", post(submit_project_data))
        .route("/list_project_data", get(list_project_data))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-service"
    }))
}

fn required<'a>(field: &'a Option<String>) -> Option<&'a str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// --- User handlers ---

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(email), Some(password)) = (
        required(&payload.username),
        required(&payload.email),
        required(&payload.password),
    ) else {
        return Err(ApiError::Validation(
            "Missing username, email, or password".to_string(),
        ));
    };

    validation::validate_username(username).map_err(ApiError::Validation)?;
    validation::validate_email(email).map_err(ApiError::Validation)?;
    validation::validate_password(password).map_err(ApiError::Validation)?;

    let user = state
        .user_repository
        .create(&NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created",
            "user_id": user.id,
            "username": user.username,
        })),
    ))
}

/// Get a user by ID; the password hash is never returned
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

// --- Product handlers ---

/// Add a new product
pub async fn add_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(raw_price)) = (required(&payload.name), payload.price.as_ref()) else {
        return Err(ApiError::Validation(
            "Missing product name or price".to_string(),
        ));
    };

    let price = validation::parse_decimal(raw_price)
        .ok_or_else(|| ApiError::Validation("Invalid price format".to_string()))?;
    if price.is_sign_negative() {
        return Err(ApiError::Validation(
            "Price must be non-negative".to_string(),
        ));
    }

    let product = state
        .product_repository
        .create(&NewProduct {
            name: name.to_string(),
            description: payload.description.clone(),
            price,
            sku: payload.sku.clone(),
            stock_quantity: payload.stock_quantity.unwrap_or(0),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Product added",
            "product_id": product.id,
        })),
    ))
}

/// List all products; prices are serialized as decimal strings
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.product_repository.list_all().await?;

    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(response))
}

// --- Application setting handlers ---

/// Get a setting by key
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let setting = state
        .setting_repository
        .find_by_key(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound("Setting not found".to_string()))?;

    Ok(Json(SettingResponse::from(setting)))
}

/// Create a setting or update it in place, keyed by its unique key
pub async fn create_or_update_setting(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSettingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(key) = required(&payload.key) else {
        return Err(ApiError::Validation("Missing setting key".to_string()));
    };

    let (setting, created) = state
        .setting_repository
        .upsert(key, payload.value.as_deref(), payload.description.as_deref())
        .await?;

    let message = if created {
        "Setting created"
    } else {
        "Setting updated"
    };
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(json!({
            "message": message,
            "setting": {
                "key": setting.key,
                "value": setting.value,
            },
        })),
    ))
}

// --- Prompt handlers ---

/// List prompts with optional filtering and sorting
pub async fn get_prompts(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category = query.category.as_deref().filter(|s| !s.is_empty());
    let term = query.term.as_deref().filter(|s| !s.is_empty());
    let sort = PromptSort::from_param(query.sort_by.as_deref());

    let prompts = state.prompt_repository.list(category, term, sort).await?;

    let response: Vec<PromptResponse> = prompts.into_iter().map(PromptResponse::from).collect();
    Ok(Json(response))
}

/// List prompt categories with their prompt counts
pub async fn get_prompt_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.prompt_repository.categories().await?;

    Ok(Json(categories))
}

/// Create a new prompt
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(title), Some(category), Some(prompt_text)) = (
        required(&payload.title),
        required(&payload.category),
        required(&payload.prompt_text),
    ) else {
        warn!("Prompt submission failed: missing title, category, or prompt_text");
        return Err(ApiError::Validation(
            "Missing title, category, or prompt_text".to_string(),
        ));
    };

    // An empty rating string counts as absent
    let rating = match payload
        .rating
        .as_ref()
        .filter(|v| !matches!(v, serde_json::Value::String(s) if s.trim().is_empty()))
    {
        Some(value) => {
            let rating = validation::parse_decimal(value).ok_or_else(|| {
                ApiError::Validation("Invalid rating format. Must be a number.".to_string())
            })?;
            if rating.is_sign_negative() || rating > rust_decimal::Decimal::new(999, 2) {
                return Err(ApiError::Validation(
                    "Rating must be between 0 and 9.99".to_string(),
                ));
            }
            Some(rating)
        }
        None => None,
    };

    let prompt = state
        .prompt_repository
        .create(&NewPrompt {
            title: title.to_string(),
            category: category.to_string(),
            description: payload.description.clone(),
            prompt_text: prompt_text.to_string(),
            rating,
        })
        .await?;

    info!("Prompt committed to database. New prompt ID: {}", prompt.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Prompt created",
            "prompt": PromptResponse::from(prompt),
        })),
    ))
}

// --- Showcase project handlers ---

/// Create a showcase project from a multipart form, storing the optional
/// image when it passes the extension allow-list
pub async fn create_showcase_project(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut title: Option<String> = None;
    let mut category: Option<String> = None;
    let mut description: Option<String> = None;
    let mut link: Option<String> = None;
    let mut image: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::Validation(format!("Failed to parse multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "project-title" => title = Some(read_text_field(field).await?),
            "project-category" => category = Some(read_text_field(field).await?),
            "project-description" => description = Some(read_text_field(field).await?),
            "project-link" => link = Some(read_text_field(field).await?),
            "project-image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::Validation(format!("Failed to read uploaded file: {}", e))
                })?;
                if !filename.is_empty() {
                    image = Some((filename, data));
                }
            }
            _ => {}
        }
    }

    let (Some(title), Some(category), Some(description)) = (
        title.filter(|s| !s.is_empty()),
        category.filter(|s| !s.is_empty()),
        description.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: title, category, or description".to_string(),
        ));
    };

    let image_filename = match image {
        Some((filename, data)) => {
            if !upload::allowed_file(&filename) {
                return Err(ApiError::Validation("Invalid image file type.".to_string()));
            }

            let stored_name = upload::sanitize_filename(&filename);
            if stored_name.is_empty() {
                return Err(ApiError::Validation("Invalid image file name.".to_string()));
            }

            upload::save_upload(&state.upload.upload_dir, &stored_name, &data)
                .await
                .map_err(|e| {
                    error!("Failed to store uploaded image: {}", e);
                    ApiError::InternalServerError
                })?;
            Some(stored_name)
        }
        None => None,
    };

    let project = state
        .showcase_repository
        .create(&NewShowcaseProject {
            title,
            category,
            description,
            link: link.filter(|s| !s.is_empty()),
            image_filename,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Project submitted successfully!",
            "project": ShowcaseProjectResponse::from(project),
        })),
    ))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(format!("Failed to read multipart field: {}", e)))
}

/// List showcase projects, newest submission first, with computed image
/// URLs
pub async fn get_showcase_projects(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.showcase_repository.list_recent().await?;

    let response: Vec<ShowcaseProjectResponse> = projects
        .into_iter()
        .map(ShowcaseProjectResponse::from)
        .collect();
    Ok(Json(response))
}

// --- Guide handlers ---

/// Submit a new guide URL
pub async fn create_guide(
    State(state): State<AppState>,
    Json(payload): Json<CreateGuideRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(url), Some(category)) = (required(&payload.url), required(&payload.category)) else {
        warn!("Guide submission failed: missing url or category");
        return Err(ApiError::Validation("Missing URL or category".to_string()));
    };

    let guide = state
        .guide_repository
        .create(&NewGuide {
            url: url.to_string(),
            category: category.to_string(),
        })
        .await?;

    info!("Guide committed to database. New guide ID: {}", guide.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Guide submitted successfully!",
            "guide": guide,
        })),
    ))
}

/// List guides, optionally filtered by category; `all` means unfiltered
pub async fn get_guides(
    State(state): State<AppState>,
    Query(query): Query<GuideQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    let guides = state.guide_repository.list(category).await?;

    Ok(Json(guides))
}

// --- Feedback handlers ---

/// Submit feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(feedback_type), Some(summary), Some(details)) = (
        required(&payload.feedback_type),
        required(&payload.summary),
        required(&payload.details),
    ) else {
        return Err(ApiError::Validation(
            "Missing required fields: feedback_type, summary, or details".to_string(),
        ));
    };

    let email = payload.email.as_deref().filter(|s| !s.is_empty());

    let feedback = state
        .feedback_repository
        .create(feedback_type, summary, details, email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Feedback submitted successfully!",
            "feedback": feedback,
        })),
    ))
}

/// List feedback entries, optionally filtered by type
pub async fn get_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let feedback_type = query.feedback_type.as_deref().filter(|s| !s.is_empty());

    let entries = state.feedback_repository.list(feedback_type).await?;

    Ok(Json(entries))
}

// --- Project data handlers ---

/// Submit a generic project data entry
pub async fn submit_project_data(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectDataRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(description), Some(url)) = (
        required(&payload.name),
        required(&payload.description),
        required(&payload.url),
    ) else {
        return Err(ApiError::Validation(
            "Missing name, description, or URL".to_string(),
        ));
    };

    let entry = state
        .project_data_repository
        .create(&NewProjectData {
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Project data submitted successfully!",
            "project": entry,
        })),
    ))
}

/// List all project data entries
pub async fn list_project_data(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state.project_data_repository.list_all().await?;

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_empty() {
        assert_eq!(required(&None), None);
        assert_eq!(required(&Some(String::new())), None);
        assert_eq!(required(&Some("value".to_string())), Some("value"));
    }
}
