//! User service for registration, login and profile lookup
//!
//! Password hashing and verification run on the blocking thread pool.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRepository};
use sqlx::PgPool;
use storefront_shared::validation::{validate_full_name, validate_password};
use storefront_shared::{AuthError, LoginRequest, LoginResponse, RegisterRequest, User};
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    fn validate_registration(req: &RegisterRequest) -> Result<(), ApiError> {
        validate_full_name(&req.full_name).map_err(ApiError::Validation)?;
        if !req.email.as_str().validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        validate_password(&req.password).map_err(ApiError::Validation)?;
        Ok(())
    }

    /// Register a new user with the default role
    pub async fn register(pool: &PgPool, req: RegisterRequest) -> Result<User, ApiError> {
        Self::validate_registration(&req)?;

        if UserRepository::email_exists(pool, &req.email).await? {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password).await?;

        let user = UserRepository::create(
            pool,
            CreateUser {
                full_name: &req.full_name,
                email: &req.email,
                password_hash: &password_hash,
            },
        )
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("Email already registered".to_string())
            }
            other => ApiError::Database(other),
        })?;

        info!(user_id = %user.id, "User registered");
        Ok(user.into())
    }

    /// Login with email and password
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, &req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(req.password, user.password_hash.clone()).await?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = jwt_service.issue(user.id, user.role())?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse { token })
    }

    /// Get the authenticated user's account
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<User, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .map(User::from)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}
