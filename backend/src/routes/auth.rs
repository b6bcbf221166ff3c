//! Authentication routes
//!
//! Registration, login and the current-user lookup. Password hashing runs
//! on the blocking thread pool inside `UserService`.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::JsonBody;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use storefront_shared::{ApiResponse, LoginRequest, LoginResponse, RegisterRequest, User};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

/// POST /auth/register
async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<()>>)> {
    UserService::register(state.db(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Registration successful")),
    ))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    let token = UserService::login(state.db(), state.jwt(), req).await?;
    Ok(Json(ApiResponse::success("Login successful", token)))
}

/// GET /auth/me
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<ApiResponse<User>>> {
    let user = UserService::get_profile(state.db(), auth.user_id).await?;
    Ok(Json(ApiResponse::success("Current user", user)))
}
