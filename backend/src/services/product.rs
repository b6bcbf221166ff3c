//! Product service - catalog CRUD with ownership checks

use crate::auth::{can_modify, AuthUser};
use crate::error::ApiError;
use crate::repositories::{CreateProduct, ProductRecord, ProductRepository, UpdateProduct};
use sqlx::PgPool;
use storefront_shared::validation::{validate_price, validate_product_name};
use storefront_shared::{CreateProductRequest, Product, UpdateProductRequest};
use tracing::{info, warn};
use uuid::Uuid;

fn not_found() -> ApiError {
    ApiError::NotFound("Product not found".to_string())
}

/// Product service
pub struct ProductService;

impl ProductService {
    /// Create a product owned by the caller
    pub async fn create(
        pool: &PgPool,
        actor: AuthUser,
        req: CreateProductRequest,
    ) -> Result<Product, ApiError> {
        validate_product_name(&req.name).map_err(ApiError::Validation)?;
        validate_price(req.price).map_err(ApiError::Validation)?;

        let product = ProductRepository::create(
            pool,
            CreateProduct {
                name: req.name,
                price: req.price,
                owner: Some(actor.user_id),
            },
        )
        .await?;

        info!(product_id = %product.id, owner = %actor.user_id, "Product created");
        Ok(product.into())
    }

    /// List every product
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, ApiError> {
        let products = ProductRepository::list_all(pool).await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    /// Fetch one product
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Product, ApiError> {
        ProductRepository::find_by_id(pool, id)
            .await?
            .map(Product::from)
            .ok_or_else(not_found)
    }

    /// Load a product the caller intends to modify
    ///
    /// Fails with 404 when it does not exist and 403 when the caller is
    /// neither its owner nor an admin.
    pub async fn authorize_mutation(
        pool: &PgPool,
        actor: AuthUser,
        id: Uuid,
    ) -> Result<ProductRecord, ApiError> {
        let product = ProductRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(not_found)?;

        if !can_modify(&actor, product.user_id) {
            warn!(
                product_id = %id,
                user_id = %actor.user_id,
                "Denied modification of product owned by another user"
            );
            return Err(ApiError::Forbidden(
                "You do not have permission to modify this product".to_string(),
            ));
        }

        Ok(product)
    }

    /// Apply a partial update to an already authorized product
    pub async fn update(
        pool: &PgPool,
        product: ProductRecord,
        req: UpdateProductRequest,
    ) -> Result<Product, ApiError> {
        if let Some(name) = &req.name {
            validate_product_name(name).map_err(ApiError::Validation)?;
        }
        if let Some(price) = req.price {
            validate_price(price).map_err(ApiError::Validation)?;
        }

        let updated = ProductRepository::update(
            pool,
            product.id,
            UpdateProduct {
                name: req.name,
                price: req.price,
            },
        )
        .await?
        .ok_or_else(not_found)?;

        info!(product_id = %updated.id, "Product updated");
        Ok(updated.into())
    }

    /// Delete a product owned by the caller (or any product, for admins)
    pub async fn delete(pool: &PgPool, actor: AuthUser, id: Uuid) -> Result<(), ApiError> {
        Self::authorize_mutation(pool, actor, id).await?;

        if !ProductRepository::delete(pool, id).await? {
            return Err(not_found());
        }

        info!(product_id = %id, user_id = %actor.user_id, "Product deleted");
        Ok(())
    }
}
