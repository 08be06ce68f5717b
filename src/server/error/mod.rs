//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the one place where an
//! error becomes an HTTP response. `AppError` wraps every domain and infrastructure
//! error; [`AppError::into_parts`] maps each kind to a status code and envelope, and
//! the `IntoResponse` impl logs and renders that pair for every handler, extractor,
//! middleware and fallback alike.

pub mod auth;
pub mod config;
pub mod user;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::error::{
        auth::AuthError, config::ConfigError, user::UserError, validation::ValidationErrors,
    },
};

/// Detail returned to the client for every 500, whatever actually went wrong.
pub const INTERNAL_ERROR_DETAIL: &str =
    "An unexpected error occurred. Please contact support if the problem persists.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` so `?` converts domain and infrastructure errors automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Access denial or unavailable authentication.
    ///
    /// Access denials are disguised as 404 Not Found; a login attempt results in
    /// 501 Not Implemented.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Business rule failure raised by the user service.
    ///
    /// Results in 404 Not Found.
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Request payload violated one or more field constraints.
    ///
    /// Results in 400 Bad Request with one entry per violation.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or filesystem error, typically while binding the listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// No route matches the request path and method.
    ///
    /// Results in 404 Not Found describing the request.
    #[error("No handler found for {method} {path}")]
    Unrouted { method: Method, path: String },

    /// Invalid request argument outside the JSON body, such as a path parameter.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Malformed or mistyped JSON bodies are reported like any other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationErr(ValidationErrors::single("body", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Maps the error kind to its status code and response envelope.
    ///
    /// This is the only translation table between failures and HTTP responses:
    ///
    /// - `UserErr::NotFound` - 404, "User not found", the failure detail
    /// - `ValidationErr` - 400, "Validation failed", one `field: reason` per violation
    /// - `AuthErr::AccessDenied` - 404, "Endpoint not found", a non-revealing detail
    /// - `AuthErr::LoginNotImplemented` - 501, "Not implemented"
    /// - `Unrouted` - 404, "Endpoint not found", the method and path
    /// - `BadRequest` - 400, "Invalid argument", the provided message
    /// - anything else - 500, "Internal server error", a generic detail
    ///
    /// # Returns
    /// - `(StatusCode, ApiResponse<()>)` - Status and failed envelope (`data` always null)
    pub fn into_parts(self) -> (StatusCode, ApiResponse<()>) {
        match self {
            Self::UserErr(err @ UserError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                ApiResponse::error("User not found", vec![err.to_string()]),
            ),
            Self::ValidationErr(errors) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error("Validation failed", errors.messages()),
            ),
            Self::AuthErr(AuthError::AccessDenied(_)) => (
                StatusCode::NOT_FOUND,
                ApiResponse::error(
                    "Endpoint not found",
                    vec!["The requested endpoint was not found".to_string()],
                ),
            ),
            Self::AuthErr(AuthError::LoginNotImplemented) => (
                StatusCode::NOT_IMPLEMENTED,
                ApiResponse::error(
                    "Not implemented",
                    vec!["Login is not implemented".to_string()],
                ),
            ),
            Self::Unrouted { method, path } => (
                StatusCode::NOT_FOUND,
                ApiResponse::error(
                    "Endpoint not found",
                    vec![format!(
                        "The requested endpoint {} {} was not found",
                        method, path
                    )],
                ),
            ),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::error("Invalid argument", vec![msg]),
            ),
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::error(
                    "Internal server error",
                    vec![INTERNAL_ERROR_DETAIL.to_string()],
                ),
            ),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Logs the full error server-side (warn for client errors, error for server errors)
/// and renders the pair produced by [`AppError::into_parts`] as JSON.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        let (status, body) = self.into_parts();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", detail);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", detail);
        }

        (status, Json(body)).into_response()
    }
}
