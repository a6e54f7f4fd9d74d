//! Catalog Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored row that does not fit the domain (e.g. unknown enum code)
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            CatalogError::Database(_) | CatalogError::CorruptRow(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.status_code() {
            StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// Driver details stay in the log
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), "Could not load this page")
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::CorruptRow(msg) => {
                tracing::error!(message = %msg, "Catalog row could not be mapped");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_exhaustion_is_unavailable() {
        let err = CatalogError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = CatalogError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = CatalogError::CorruptRow("difficulty EXPERT".to_string());
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.to_app_error().message(), "Could not load this page");
    }

    #[test]
    fn test_into_response_status() {
        let response = CatalogError::CorruptRow("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
