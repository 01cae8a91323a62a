//! Common error types used across the workspace.
//!
//! Each layer converts into [`ListHubError`] via `#[from]`. The display
//! output of every variant is what the panel shows the operator, so request
//! failures render as the backend's raw response text.

/// Client-side validation failure. Never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address does not contain an `@`.
    #[error("invalid email address")]
    InvalidEmail,

    /// A text input could not be parsed as an identifier.
    #[error("invalid {field}: {value:?}")]
    InvalidId { field: &'static str, value: String },
}

/// A request to the backend failed.
///
/// `message` carries the raw response body for non-2xx responses, or the
/// transport/decoding error text when there was no usable response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Text to surface to the operator.
    pub message: String,
}

impl RequestError {
    /// Failure with a response from the backend.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Failure before (or instead of) a usable response.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Top-level error for every panel operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListHubError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),
}
