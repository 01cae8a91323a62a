//! City — where a listed service operates.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{self, Form};
use crate::id::CityId;
use crate::search::Searchable;

/// A city as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state: String,
}

impl City {
    /// Merge edit-prompt answers over the current values.
    ///
    /// A blank answer keeps the current value; both fields are required.
    #[must_use]
    pub fn merge(&self, name: &str, state: &str) -> CityChanges {
        CityChanges {
            name: form::or_previous(name, &self.name),
            state: form::or_previous(state, &self.state),
        }
    }

    /// Label used in select options: `"<name> - <state>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.state)
    }
}

impl Searchable for City {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.state.as_str()]
    }
}

/// Raw create-form input for a city.
#[derive(Debug, Clone, Default)]
pub struct CityForm {
    pub name: String,
    pub state: String,
}

/// Request body for `POST /cities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCity {
    pub name: String,
    pub state: String,
}

impl Form for CityForm {
    type Draft = NewCity;

    fn into_draft(self) -> Result<NewCity, ValidationError> {
        Ok(NewCity {
            name: form::required(&self.name, "name")?,
            state: form::required(&self.state, "state")?,
        })
    }
}

/// Request body for `PUT /cities/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityChanges {
    pub name: String,
    pub state: String,
}
