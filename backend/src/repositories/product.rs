//! Product repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use storefront_shared::Product;
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, name, price, user_id, created_at, updated_at";

/// Product record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a product
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub price: i64,
    pub owner: Option<Uuid>,
}

/// Input for updating a product; `None` fields keep their stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<i64>,
}

/// Product repository for database operations
pub struct ProductRepository;

impl ProductRepository {
    /// Insert a product
    pub async fn create(pool: &PgPool, input: CreateProduct) -> sqlx::Result<ProductRecord> {
        sqlx::query_as::<_, ProductRecord>(&format!(
            r#"
            INSERT INTO products (name, price, user_id)
            VALUES ($1, $2, $3)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(input.name)
        .bind(input.price)
        .bind(input.owner)
        .fetch_one(pool)
        .await
    }

    /// List all products, oldest first; empty when there are none
    pub async fn list_all(pool: &PgPool) -> sqlx::Result<Vec<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at, id"
        ))
        .fetch_all(pool)
        .await
    }

    /// Find product by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Update the provided fields of a product
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateProduct,
    ) -> sqlx::Result<Option<ProductRecord>> {
        sqlx::query_as::<_, ProductRecord>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(updates.name)
        .bind(updates.price)
        .fetch_optional(pool)
        .await
    }

    /// Delete a product; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
