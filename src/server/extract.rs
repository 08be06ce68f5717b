//! Request extractors that reject bad input before a handler body runs.
//!
//! Both extractors reject with `AppError`, so malformed requests reach the client
//! through the same envelope as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::server::{error::AppError, util::validate::Validate};

/// JSON body deserialized into `T::Payload` and then validated into `T`.
///
/// Rejects with `AppError::ValidationErr` when the body is not valid JSON of the
/// expected shape, or when any field constraint is violated.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T::Payload>::from_request(req, state).await?;

        Ok(Self(T::validate(payload)?))
    }
}

/// Numeric `{id}` path segment.
///
/// Rejects with `AppError::BadRequest` when the segment is not a valid id.
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;

        Ok(Self(id))
    }
}
