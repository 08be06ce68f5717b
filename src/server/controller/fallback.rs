use axum::http::{Method, Uri};

use crate::server::error::AppError;

/// Handles every request no route matches, including unsupported methods on known
/// paths.
///
/// # Returns
/// - `404 Not Found` - Envelope describing the requested method and path
pub async fn endpoint_not_found(method: Method, uri: Uri) -> AppError {
    AppError::Unrouted {
        method,
        path: uri.path().to_string(),
    }
}
