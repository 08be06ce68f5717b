use thiserror::Error;

/// Failures raised by the user service itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    /// No user is stored under the requested identifier.
    ///
    /// Results in 404 Not Found with the message below as the error detail.
    #[error("User with ID {0} not found")]
    NotFound(i64),
}
