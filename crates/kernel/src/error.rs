//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::menu::ContextError;
use crate::routing::UrlError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Url(#[from] UrlError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_)
            | AppError::Database(_)
            | AppError::Context(_)
            | AppError::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details go to the log, not the client
        let body = match &self {
            AppError::NotFound => self.to_string(),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "internal server error".to_string()
            }
            AppError::Context(e) => {
                tracing::error!(error = %e, "application context lookup failed");
                "internal server error".to_string()
            }
            AppError::Url(e) => {
                tracing::error!(error = %e, "menu url resolution failed");
                "internal server error".to_string()
            }
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
