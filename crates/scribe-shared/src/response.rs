//! Structured error body returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable error codes carried in [`ErrorResponse::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ResourceNotFound,
    ConstraintViolation,
    BadRequest,
    StorageUnavailable,
    GenericError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorCode::ConstraintViolation => "CONSTRAINT_VIOLATION",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::StorageUnavailable => "STORAGE_UNAVAILABLE",
            ErrorCode::GenericError => "GENERIC_ERROR",
        }
    }
}

/// Error body: what failed, and on which request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_method: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, status: u16, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: message.into(),
            status,
            url: None,
            req_method: None,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    pub fn with_request(mut self, url: impl Into<String>, method: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self.req_method = Some(method.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    // Common error constructors
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, 404, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, 400, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, 400, message)
    }

    pub fn storage_unavailable() -> Self {
        Self::new(
            ErrorCode::StorageUnavailable,
            503,
            "Storage is temporarily unavailable",
        )
    }

    pub fn internal_error() -> Self {
        Self::new(ErrorCode::GenericError, 500, "Internal Server Error")
    }
}
