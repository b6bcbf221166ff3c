//! Product routes
//!
//! Every route here sits behind `require_auth`. Update and delete are
//! limited to the product's owner or an admin.

use crate::auth::{require_auth, AuthUser};
use crate::error::ApiResult;
use crate::routes::extract::{decode_json, parse_id, JsonBody};
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use storefront_shared::{ApiResponse, CreateProductRequest, Product, UpdateProductRequest};

/// Create product routes, guarded by the bearer-token gate
pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// POST /products - the caller becomes the owner
async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let product = ProductService::create(state.db(), auth, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Product created successfully", product)),
    ))
}

/// GET /products
async fn list_products(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductService::list(state.db()).await?;
    Ok(Json(ApiResponse::success(
        "Products retrieved successfully",
        products,
    )))
}

/// GET /products/:id
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let id = parse_id(&id)?;
    let product = ProductService::get(state.db(), id).await?;
    Ok(Json(ApiResponse::success("Product found", product)))
}

/// PUT /products/:id
///
/// The body is decoded only after the ownership check, so a caller without
/// permission gets 403 even when the body is malformed.
async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let id = parse_id(&id)?;
    let existing = ProductService::authorize_mutation(state.db(), auth, id).await?;
    let req: UpdateProductRequest = decode_json(&body)?;
    let product = ProductService::update(state.db(), existing, req).await?;
    Ok(Json(ApiResponse::success(
        "Product updated successfully",
        product,
    )))
}

/// DELETE /products/:id
async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id)?;
    ProductService::delete(state.db(), auth, id).await?;
    Ok(Json(ApiResponse::ok("Product deleted successfully")))
}
