use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod state;
mod upload;
mod validation;

#[cfg(test)]
mod test_util;

use common::database::{DatabaseConfig, init_pool};
use common::schema::ensure_schema;

use crate::state::AppState;
use crate::upload::UploadConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Create tables if absent
    ensure_schema(&pool).await?;

    // Make sure the showcase image directory exists
    let upload_config = UploadConfig::from_env();
    upload_config.ensure_dir().await?;

    info!("API service initialized successfully");

    let app_state = AppState::new(pool, upload_config);

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr =
        std::env::var("API_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
