//! Wire types exchanged with API callers.
//!
//! Everything in here is plain serde data: request payloads as they arrive, response
//! DTOs, and the envelope every response body is wrapped in.

pub mod api;
pub mod user;
