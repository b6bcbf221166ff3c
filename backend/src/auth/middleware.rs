//! Authentication middleware
//!
//! Provides the bearer-token gate for protected route groups and the
//! [`AuthUser`] extractor that hands the verified identity to handlers.

use crate::auth::jwt::{Claims, JwtService};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use storefront_shared::{AuthError, Role};
use tracing::warn;
use uuid::Uuid;

/// Authenticated caller
///
/// Handlers take this as a parameter. Inside a group guarded by
/// [`require_auth`] it is read back from the request extensions; elsewhere
/// the extractor validates the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` value
///
/// The value must consist of exactly two space-separated parts and the
/// scheme is matched case-insensitively.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Validate the request's bearer token and return the caller's identity
pub fn authenticate(headers: &HeaderMap, jwt: &JwtService) -> Result<AuthUser, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let token = parse_bearer(value)?;
    let claims = jwt.verify(token)?;

    Ok(claims.into())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(*user);
        }

        let app_state = AppState::from_ref(state);
        authenticate(&parts.headers, app_state.jwt()).map_err(|e| {
            warn!(reason = %e, "Rejected unauthenticated request");
            ApiError::from(e)
        })
    }
}

/// Middleware guarding a route group
///
/// Requests without a valid bearer token are answered with 401 before any
/// handler runs; authenticated requests carry an [`AuthUser`] extension.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), state.jwt()).map_err(|e| {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = %e,
            "Rejected unauthenticated request"
        );
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
