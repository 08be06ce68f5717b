//! Field-level validation of request payloads.
//!
//! Each validated type implements [`Validate`], turning its raw serde payload into a
//! value whose invariants hold. Violations are collected rather than short-circuited
//! so a caller sees every bad field at once.

use serde::de::DeserializeOwned;

use crate::server::error::validation::ValidationErrors;

/// Conversion from a raw request payload into a validated value.
pub trait Validate: Sized {
    /// Shape the request body is deserialized into before validation.
    type Payload: DeserializeOwned + Send;

    /// Checks every constraint on `payload`.
    ///
    /// # Returns
    /// - `Ok(Self)` - All constraints hold
    /// - `Err(ValidationErrors)` - One entry per violated constraint
    fn validate(payload: Self::Payload) -> Result<Self, ValidationErrors>;
}

/// Checks a text field that must be present, non-blank and at most `max` characters.
///
/// Records a violation in `errors` and returns `None` when any rule is broken.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max: usize,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, "must not be null");
            None
        }
        Some(value) => bounded_text(errors, field, value, max),
    }
}

/// Checks a text field that may be absent, but if present must be non-blank and at
/// most `max` characters.
///
/// Returns `None` both when the field is absent and when it is invalid; only the
/// latter records a violation in `errors`.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
    max: usize,
) -> Option<String> {
    value.and_then(|value| bounded_text(errors, field, value, max))
}

fn bounded_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: String,
    max: usize,
) -> Option<String> {
    if value.trim().is_empty() {
        errors.add(field, "must not be blank");
        return None;
    }

    if value.chars().count() > max {
        errors.add(field, format!("size must be between 1 and {}", max));
        return None;
    }

    Some(value)
}
