//! Error handling - maps failures onto status codes and structured bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_core::DomainError;
use scribe_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type rendered as an [`ErrorResponse`] body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation errors: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The error body, without request details.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(errors) => ErrorResponse::validation(errors.join(", ")),
            AppError::StorageUnavailable(_) => ErrorResponse::storage_unavailable(),
            AppError::Internal(_) => ErrorResponse::internal_error(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::StorageUnavailable(detail) => {
                tracing::error!("Storage unavailable: {}", detail);
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
            }
            AppError::BadRequest(detail) => {
                tracing::warn!("Bad request: {}", detail);
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(self.to_error_response())
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found!", entity_type))
            }
            DomainError::Validation(msg) => AppError::Validation(vec![msg]),
            DomainError::StorageUnavailable(msg) => AppError::StorageUnavailable(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
