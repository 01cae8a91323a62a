//! Raw create-form input and its conversion into a validated draft.

use serde::Serialize;

use crate::error::ValidationError;

/// Text collected from a create form, before validation.
pub trait Form {
    /// The request body sent to the backend once the form is valid.
    type Draft: Serialize;

    /// Validate the input and produce the request body.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    fn into_draft(self) -> Result<Self::Draft, ValidationError>;
}

/// Trim `value`, rejecting it when nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for blank input.
pub fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

/// Keep the previous value when the operator leaves a required field blank.
#[must_use]
pub fn or_previous(answer: &str, previous: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        previous.to_string()
    } else {
        answer.to_string()
    }
}

/// Minimal email check: the address must contain an `@`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] otherwise.
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}
