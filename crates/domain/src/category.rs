//! Category — the kind of service being listed.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{self, Form};
use crate::id::CategoryId;
use crate::search::Searchable;

/// A category as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Merge the edit-prompt answer; blank keeps the current name.
    #[must_use]
    pub fn merge(&self, name: &str) -> CategoryChanges {
        CategoryChanges {
            name: form::or_previous(name, &self.name),
        }
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Raw create-form input for a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
}

/// Request body for `POST /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    pub name: String,
}

impl Form for CategoryForm {
    type Draft = NewCategory;

    fn into_draft(self) -> Result<NewCategory, ValidationError> {
        Ok(NewCategory {
            name: form::required(&self.name, "name")?,
        })
    }
}

/// Request body for `PUT /categories/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChanges {
    pub name: String,
}
