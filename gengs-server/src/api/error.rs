//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use gengs_auth::AuthError;
use gengs_core::CoreError;
use gengs_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or rejected credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert store errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal store details to clients
        log::error!("Store error: {}", e);
        ApiError::Internal {
            message: "Store operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation {
                message,
                field,
                location,
            } => ApiError::Validation {
                message,
                field,
                location,
            },
        }
    }
}

/// Convert ObjectId parse errors to API errors
impl From<bson::oid::Error> for ApiError {
    #[track_caller]
    fn from(e: bson::oid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid user id format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert authentication errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::JwtEncode { .. } => {
                log::error!("Token issuance failed: {}", e);
                ApiError::Internal {
                    message: "Failed to issue token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => ApiError::Unauthorized {
                message: unauthorized_message(&other).to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Client-facing 401 messages, free of capture locations
fn unauthorized_message(e: &AuthError) -> &'static str {
    match e {
        AuthError::MissingHeader { .. } => "Missing authorization header",
        AuthError::InvalidScheme { .. } => "Authorization scheme must be 'Bearer'",
        AuthError::TokenExpired { .. } => "Token expired",
        _ => "Invalid credential",
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
