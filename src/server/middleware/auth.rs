use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests that lack the configured API key.
///
/// A no-op when no key is configured. Rejections surface as `AuthError::AccessDenied`,
/// which the error layer renders as 404 so protected endpoints are not revealed.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if provided != Some(expected) {
            return Err(AuthError::AccessDenied(format!(
                "missing or invalid API key for {} {}",
                request.method(),
                request.uri().path()
            ))
            .into());
        }
    }

    Ok(next.run(request).await)
}
