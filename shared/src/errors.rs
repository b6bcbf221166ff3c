//! Error types for the Storefront application

use thiserror::Error;

/// Authentication error types
///
/// Token failures deliberately collapse into [`AuthError::InvalidToken`] so
/// callers cannot tell an expired token from a forged one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Missing authorization header")]
    MissingToken,

    #[error("Authorization header must be 'Bearer <token>'")]
    MalformedHeader,
}

/// Error returned when a role string is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);
