//! Product repository for database operations

use sqlx::{PgPool, Row};

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{NewProduct, Product};

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product
    pub async fn create(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, sku, stock_quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, sku, stock_quantity, created_at, updated_at
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(&new_product.sku)
        .bind(new_product.stock_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_sqlx(e, "Product SKU already exists"))?;

        Ok(Product {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            price: row.get("price"),
            sku: row.get("sku"),
            stock_quantity: row.get("stock_quantity"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// List all products
    pub async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, sku, stock_quantity, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{test_pool, unique_suffix};
    use rust_decimal::Decimal;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_created_price_round_trips_as_decimal_string() {
        let pool = test_pool().await;
        let repository = ProductRepository::new(pool);
        let suffix = unique_suffix();

        let new_product = NewProduct {
            name: format!("Gadget {}", suffix),
            description: Some("A test gadget.".to_string()),
            price: Decimal::new(1099, 2),
            sku: Some(format!("GD{}", suffix)),
            stock_quantity: 3,
        };

        let product = repository.create(&new_product).await.expect("create");
        assert!(product.id > 0);

        let listed = repository.list_all().await.expect("list");
        let found = listed
            .iter()
            .find(|p| p.id == product.id)
            .expect("product listed");
        assert_eq!(found.price.to_string(), "10.99");
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_duplicate_sku_is_rejected() {
        let pool = test_pool().await;
        let repository = ProductRepository::new(pool);
        let suffix = unique_suffix();

        let new_product = NewProduct {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(2550, 2),
            sku: Some(format!("WD{}", suffix)),
            stock_quantity: 0,
        };

        repository.create(&new_product).await.expect("first create");

        let err = repository
            .create(&new_product)
            .await
            .expect_err("duplicate sku");
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }
}
