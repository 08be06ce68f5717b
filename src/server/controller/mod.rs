//! HTTP request handlers.
//!
//! Controllers bind a method and path to one service call and wrap the result in the
//! response envelope. They never catch errors: every failure propagates as `AppError`
//! and is rendered by the error layer.

pub mod fallback;
pub mod user;

#[cfg(test)]
mod test;
