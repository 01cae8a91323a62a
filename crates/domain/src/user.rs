//! Users: accounts on the listing platform.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{self, Form};
use crate::id::UserId;
use crate::search::Searchable;

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Merge edit-prompt answers over the current values.
    ///
    /// Blank answers keep the current value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when a new, non-blank email
    /// lacks an `@`.
    pub fn merge(&self, name: &str, email: &str) -> Result<UserChanges, ValidationError> {
        if !email.trim().is_empty() {
            form::check_email(email)?;
        }
        Ok(UserChanges {
            name: form::or_previous(name, &self.name),
            email: form::or_previous(email, &self.email),
        })
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// Raw create-form input for a user.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
}

/// Request body for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl Form for UserForm {
    type Draft = NewUser;

    fn into_draft(self) -> Result<NewUser, ValidationError> {
        let name = form::required(&self.name, "name")?;
        let email = form::required(&self.email, "email")?;
        form::check_email(&email)?;
        Ok(NewUser { name, email })
    }
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
}
