//! Idempotent database seeding
//!
//! Populates empty tables with fixture rows for local development. Tables
//! that already hold data are left untouched, so the binary is safe to run
//! repeatedly.

use anyhow::Result;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{DatabaseConfig, init_pool};
use common::schema::ensure_schema;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Initializing database...");

    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    ensure_schema(&pool).await?;

    seed_settings(&pool).await?;
    seed_products(&pool).await?;
    seed_prompts(&pool).await?;
    seed_showcase_projects(&pool).await?;
    seed_project_data(&pool).await?;

    info!("Database initialization complete");
    Ok(())
}

async fn table_is_empty(pool: &PgPool, table: &str) -> Result<bool> {
    // Table names come from the fixed seed list, never from input
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

async fn seed_settings(pool: &PgPool) -> Result<()> {
    if !table_is_empty(pool, "application_settings").await? {
        info!("Application settings already exist, skipping initial data");
        return Ok(());
    }

    info!("Adding initial application settings...");

    let settings = [
        (
            "site_name",
            "My Awesome App",
            "The public name of the application.",
        ),
        (
            "maintenance_mode",
            "false",
            "Set to 'true' to enable maintenance mode.",
        ),
        (
            "admin_email",
            "admin@example.com",
            "Default admin contact email.",
        ),
    ];

    for (key, value, description) in settings {
        sqlx::query(
            "INSERT INTO application_settings (key, value, description) VALUES ($1, $2, $3)",
        )
        .bind(key)
        .bind(value)
        .bind(description)
        .execute(pool)
        .await?;
    }

    info!("Initial application settings added");
    Ok(())
}

async fn seed_products(pool: &PgPool) -> Result<()> {
    if !table_is_empty(pool, "products").await? {
        info!("Products already exist, skipping initial data");
        return Ok(());
    }

    info!("Adding initial sample products...");

    let products = [
        (
            "Laptop Pro",
            "High-performance laptop for professionals.",
            Decimal::new(120000, 2),
            "LP1001",
            50,
        ),
        (
            "Wireless Mouse",
            "Ergonomic wireless mouse.",
            Decimal::new(2550, 2),
            "WM2002",
            200,
        ),
        (
            "Mechanical Keyboard",
            "RGB Mechanical Keyboard with blue switches.",
            Decimal::new(7500, 2),
            "MK3003",
            100,
        ),
    ];

    for (name, description, price, sku, stock_quantity) in products {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price, sku, stock_quantity)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(sku)
        .bind(stock_quantity)
        .execute(pool)
        .await?;
    }

    info!("Initial sample products added");
    Ok(())
}

async fn seed_prompts(pool: &PgPool) -> Result<()> {
    if !table_is_empty(pool, "prompts").await? {
        info!("Prompts already exist, skipping initial data");
        return Ok(());
    }

    info!("Adding initial sample prompts...");

    let prompts: [(&str, &str, &str, &str, Option<Decimal>, i32); 5] = [
        (
            "Code Debugger",
            "Debugging",
            "Helps identify and suggest fixes for bugs in a given code snippet.",
            "Analyze the following code for potential bugs and suggest fixes.\n\
             Provide a brief explanation for each identified issue.\n\n\
             Code:\n```\n{{paste code here}}\n```",
            Some(Decimal::new(45, 1)),
            150,
        ),
        (
            "Blog Post Outline Generator",
            "Writing",
            "Generates a structured outline for a blog post on a specified topic.",
            "Create a comprehensive blog post outline for the topic: \"{{topic}}\".\n\
             The outline should include:\n- Main sections (H2)\n\
             - Key talking points under each section (H3/bullets)\n\
             - A suggested introduction and conclusion.\n\
             Target audience: {{target audience}}\nTone: {{desired tone}}",
            Some(Decimal::new(50, 1)),
            250,
        ),
        (
            "SQL Query Generator",
            "Coding",
            "Generates SQL queries based on natural language description.",
            "Based on the following database schema and natural language request, \
             generate the appropriate SQL query.\n\n\
             Schema:\n{{paste schema here}}\n\nRequest: {{natural language request}}",
            Some(Decimal::new(40, 1)),
            120,
        ),
        (
            "Email Subject Line Creator",
            "Writing",
            "Creates catchy email subject lines for a given email body or topic.",
            "Generate 5 catchy email subject lines for an email with the following \
             content/topic:\n\nTopic/Content Summary:\n{{email summary here}}\n\n\
             Target Audience: {{target audience}}",
            None,
            90,
        ),
        (
            "Unit Test Helper",
            "Coding",
            "Helps write unit tests for a given function or class.",
            "For the following {{language}} function/class, please help me write \
             comprehensive unit tests.\n\nFunction/Class:\n```{{language}}\n{{code here}}\n```\n\n\
             Consider edge cases, typical inputs, and error conditions.",
            Some(Decimal::new(42, 1)),
            180,
        ),
    ];

    for (title, category, description, prompt_text, rating, usage_count) in prompts {
        sqlx::query(
            r#"
            INSERT INTO prompts (title, category, description, prompt_text, rating, usage_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(description)
        .bind(prompt_text)
        .bind(rating)
        .bind(usage_count)
        .execute(pool)
        .await?;
    }

    info!("Initial sample prompts added");
    Ok(())
}

async fn seed_showcase_projects(pool: &PgPool) -> Result<()> {
    if !table_is_empty(pool, "showcase_projects").await? {
        info!("Showcase projects already exist, skipping initial data");
        return Ok(());
    }

    info!("Adding initial sample showcase projects...");

    let projects = [
        (
            "Community Hub",
            "Web Development",
            "The community website itself, with content submission and showcase pages.",
            Some("https://example.com/community"),
        ),
        (
            "Automated Code Reviewer",
            "Automation",
            "A tool that automatically reviews code submissions for common errors and style issues.",
            Some("https://github.com/example/code-reviewer"),
        ),
    ];

    for (title, category, description, link) in projects {
        sqlx::query(
            r#"
            INSERT INTO showcase_projects (title, category, description, link)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(description)
        .bind(link)
        .execute(pool)
        .await?;
    }

    info!("Initial sample showcase projects added");
    Ok(())
}

async fn seed_project_data(pool: &PgPool) -> Result<()> {
    if !table_is_empty(pool, "projects_data").await? {
        info!("Project data already exists, skipping initial data");
        return Ok(());
    }

    info!("Adding initial sample project data...");

    let entries = [
        (
            "Awesome Project 1",
            "This is the first awesome project.",
            "http://example.com/project1",
        ),
        (
            "Awesome Project 2",
            "This is the second awesome project.",
            "http://example.com/project2",
        ),
        (
            "Awesome Project 3",
            "This is the third awesome project.",
            "http://example.com/project3",
        ),
    ];

    for (name, description, url) in entries {
        sqlx::query("INSERT INTO projects_data (name, description, url) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(description)
            .bind(url)
            .execute(pool)
            .await?;
    }

    info!("Initial sample project data added");
    Ok(())
}
