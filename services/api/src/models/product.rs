//! Product model and related payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product entity as stored in the `products` table
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub sku: Option<String>,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New product creation payload with an already validated price
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub sku: Option<String>,
    pub stock_quantity: i32,
}

/// Request for product creation
///
/// The price is accepted as a JSON string or number and parsed as an
/// exact decimal before any database access.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<serde_json::Value>,
    pub sku: Option<String>,
    pub stock_quantity: Option<i32>,
}

/// Response for product listings; the price is serialized as a decimal
/// string to keep the exact base-10 representation
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub sku: Option<String>,
    pub stock_quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            sku: product.sku,
            stock_quantity: product.stock_quantity,
        }
    }
}
