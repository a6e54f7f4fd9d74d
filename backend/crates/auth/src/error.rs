//! Auth Error Types
//!
//! Credential failures are not errors here: use cases report them as
//! `Ok(None)`. These variants cover the store and crypto failing. Page
//! handlers log them and answer with the generic form message or an
//! anonymous loader response, so they never become HTTP errors directly.

use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unique violation on users.email
    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::EmailTaken => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}
