use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Caller is not allowed to reach the requested endpoint.
    ///
    /// Results in 404 Not Found, identical to a missing endpoint. The reason is only
    /// logged.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Credential verification has no backing identity store yet.
    ///
    /// Results in 501 Not Implemented.
    #[error("Login is not implemented")]
    LoginNotImplemented,
}
