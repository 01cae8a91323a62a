//! Typed identifier newtypes for backend-assigned integer keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw backend key.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`City`](crate::city::City).
    CityId
);

define_id!(
    /// Unique identifier for a [`Category`](crate::category::Category).
    CategoryId
);

define_id!(
    /// Unique identifier for a [`Service`](crate::service::Service).
    ServiceId
);

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

/// Parse a required identifier typed or selected by the operator.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `raw` is blank and
/// [`ValidationError::InvalidId`] when it is not an integer.
pub fn parse_required<I: FromStr>(raw: &str, field: &'static str) -> Result<I, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    raw.parse().map_err(|_| ValidationError::InvalidId {
        field,
        value: raw.to_string(),
    })
}
