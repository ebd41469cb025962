//! Error types shared across layers.
//!
//! - [`StoreError`] - failures reported by repository implementations
//! - [`ClickLogError`] - best-effort click logging failure, never surfaced to clients
//! - [`AppError`] - HTTP-facing error rendered as `{ "error": ..., "details": ... }`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Errors produced by the mapping and click stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The short code is already taken (unique constraint violation).
    #[error("short code '{0}' already exists")]
    DuplicateCode(String),

    #[error("short code '{0}' not found")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// A click event could not be persisted.
///
/// Returned by [`crate::application::services::ClickService::log_click`]; callers log
/// it and carry on with the redirect.
#[derive(Debug, thiserror::Error)]
#[error("failed to log click for mapping {mapping_id}: {source}")]
pub struct ClickLogError {
    pub mapping_id: i64,
    #[source]
    pub source: StoreError,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "is_empty_details")]
    details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details } => (message, details),
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                (message, details)
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateCode(code) => {
                AppError::conflict("Short code already exists", json!({ "short_code": code }))
            }
            StoreError::NotFound(code) => {
                AppError::not_found("Short URL not found", json!({ "short_code": code }))
            }
            StoreError::Storage(source) => {
                tracing::error!(error = %source, "storage failure");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::bad_request("Invalid URL provided", json!({ "fields": fields }))
    }
}
