//! Unified error handling
//!
//! Provides the application error type and its HTTP response mapping:
//! - [`AppError`] - closed application error enum
//! - [`IntoResponse`] impl - the single place where errors become status codes
//!
//! # Status mapping
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | OutOfService | 503 | error message |
//! | NotFound | 404 | error message |
//! | NoContent | 204 | error message |
//! | SaveFailed | 500 | empty JSON list |
//! | Validation | 400 | `"invalid params"` |
//! | Database / Internal | 500 | `"Internal Server Error"` |
//!
//! Handlers must not translate status codes themselves; they bubble
//! `AppError` up and this impl does the rest.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
///
/// Service operations return one of these kinds; the dispatcher
/// pattern-matches exhaustively instead of catching by type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Upstream feed errors ==========
    #[error("{0}")]
    /// Feed unreachable or transport failure (503)
    OutOfService(String),

    // ========== Business errors ==========
    #[error("{0}")]
    /// Identifier absent, or feed responded with no records (404)
    NotFound(String),

    #[error("{0}")]
    /// Requested page came back empty (204)
    NoContent(String),

    #[error("{0}")]
    /// Persistence failure during a create batch (500, empty list body)
    SaveFailed(String),

    #[error("Validation failed: {0}")]
    /// Malformed input shape (400)
    Validation(String),

    // ========== System errors ==========
    #[error("Database error: {0}")]
    /// Store-level failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::OutOfService(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg).into_response()
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),

            AppError::NoContent(msg) => (StatusCode::NO_CONTENT, msg).into_response(),

            // Partial writes before the failure stay committed; the body
            // deliberately hides them behind an empty collection.
            AppError::SaveFailed(msg) => {
                error!(target: "database", error = %msg, "Create batch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::Value::Array(Vec::new())),
                )
                    .into_response()
            }

            AppError::Validation(msg) => {
                error!(error = %msg, "Validation failed");
                (StatusCode::BAD_REQUEST, "invalid params").into_response()
            }

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn out_of_service(msg: impl Into<String>) -> Self {
        Self::OutOfService(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn no_content(msg: impl Into<String>) -> Self {
        Self::NoContent(msg.into())
    }

    pub fn save_failed(msg: impl Into<String>) -> Self {
        Self::SaveFailed(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
