//! Service — a listed business, tied to one city and one category.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::form::{self, Form};
use crate::id::{self, CategoryId, CityId, ServiceId};
use crate::search::Searchable;

/// City fields the backend joins into service rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    pub name: String,
    pub state: String,
}

/// Category fields the backend joins into service rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Table text for a missing description, category or city.
pub const NOT_AVAILABLE: &str = "N/A";

/// A service as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub city_id: CityId,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default, rename = "cities")]
    pub city: Option<CityRef>,
    #[serde(default, rename = "categories")]
    pub category: Option<CategoryRef>,
}

impl Service {
    /// Merge edit-prompt answers over the current values.
    ///
    /// A blank name keeps the current one. The description is optional and
    /// taken verbatim, so a blank answer clears it; `None` (prompt
    /// dismissed) leaves it untouched on the backend.
    #[must_use]
    pub fn merge(&self, name: &str, description: Option<&str>) -> ServiceChanges {
        ServiceChanges {
            name: form::or_previous(name, &self.name),
            description: description.map(|d| d.trim().to_string()),
        }
    }

    /// `"<city> - <state>"` from the joined city, if present.
    #[must_use]
    pub fn city_label(&self) -> Option<String> {
        self.city
            .as_ref()
            .map(|city| format!("{} - {}", city.name, city.state))
    }

    /// Name of the joined category, if present.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Description cell; blank shows as [`NOT_AVAILABLE`].
    #[must_use]
    pub fn description_cell(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    #[must_use]
    pub fn category_cell(&self) -> &str {
        self.category_name().unwrap_or(NOT_AVAILABLE)
    }

    #[must_use]
    pub fn city_cell(&self) -> String {
        self.city_label()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.description.as_deref())
            .collect()
    }
}

/// Raw create-form input for a service; ids come from `<select>` values.
#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub city_id: String,
}

/// Request body for `POST /services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewService {
    pub name: String,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub city_id: CityId,
}

impl Form for ServiceForm {
    type Draft = NewService;

    fn into_draft(self) -> Result<NewService, ValidationError> {
        let name = form::required(&self.name, "name")?;
        let category_id = id::parse_required(&self.category_id, "category")?;
        let city_id = id::parse_required(&self.city_id, "city")?;
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        Ok(NewService {
            name,
            description,
            category_id,
            city_id,
        })
    }
}

/// Request body for `PUT /services/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceChanges {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters accepted by `GET /services`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    pub category_id: Option<CategoryId>,
    pub city_id: Option<CityId>,
}

impl ServiceQuery {
    /// Build a query from the filter selects; an empty value means "all".
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for a non-numeric selection.
    pub fn from_selects(category_id: &str, city_id: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            category_id: optional_id(category_id, "category")?,
            city_id: optional_id(city_id, "city")?,
        })
    }

    /// Query-string pairs, `category_id` first, omitting unset filters.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(city_id) = self.city_id {
            pairs.push(("city_id", city_id.to_string()));
        }
        pairs
    }
}

fn optional_id<I: std::str::FromStr>(
    raw: &str,
    field: &'static str,
) -> Result<Option<I>, ValidationError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        id::parse_required(raw, field).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchTerm;

    fn form() -> ServiceForm {
        ServiceForm {
            name: "Casa do Pão".to_string(),
            description: "Bakery".to_string(),
            category_id: "3".to_string(),
            city_id: "7".to_string(),
        }
    }

    fn service() -> Service {
        serde_json::from_str(
            r#"{
                "id": 11,
                "name": "Casa do Pão",
                "description": "Fresh bread daily",
                "category_id": 3,
                "city_id": 7,
                "logo_url": null,
                "cities": {"name": "Recife", "state": "PE"},
                "categories": {"name": "Bakery"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn should_show_joined_values_in_cells() {
        let service = service();
        assert_eq!(service.description_cell(), "Fresh bread daily");
        assert_eq!(service.category_cell(), "Bakery");
        assert_eq!(service.city_cell(), "Recife - PE");
    }

    #[test]
    fn should_show_not_available_for_missing_cells() {
        let mut service = service();
        service.description = Some("  ".to_string());
        service.city = None;
        service.category = None;

        assert_eq!(service.description_cell(), "N/A");
        assert_eq!(service.category_cell(), "N/A");
        assert_eq!(service.city_cell(), "N/A");
    }

    #[test]
    fn should_build_draft_with_parsed_ids() {
        let draft = form().into_draft().unwrap();
        assert_eq!(draft.category_id, CategoryId::new(3));
        assert_eq!(draft.city_id, CityId::new(7));
        assert_eq!(draft.description.as_deref(), Some("Bakery"));
    }

    #[test]
    fn should_drop_blank_description_from_draft() {
        let mut form = form();
        form.description = "  ".to_string();
        assert!(form.into_draft().unwrap().description.is_none());
    }

    #[test]
    fn should_reject_draft_when_no_city_selected() {
        let mut form = form();
        form.city_id = String::new();
        assert_eq!(
            form.into_draft(),
            Err(ValidationError::MissingField("city"))
        );
    }

    #[test]
    fn should_reject_draft_when_name_is_empty() {
        let mut form = form();
        form.name = String::new();
        assert_eq!(
            form.into_draft(),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn should_decode_joined_city_and_category() {
        let service = service();
        assert_eq!(service.city_label().as_deref(), Some("Recife - PE"));
        assert_eq!(service.category_name(), Some("Bakery"));
    }

    #[test]
    fn should_decode_row_without_joins() {
        let service: Service = serde_json::from_str(
            r#"{"id": 1, "name": "X", "category_id": 1, "city_id": 1}"#,
        )
        .unwrap();
        assert!(service.description.is_none());
        assert!(service.city_label().is_none());
        assert!(service.logo_url.is_none());
    }

    #[test]
    fn should_search_description_too() {
        let service = service();
        assert!(service.matches(&SearchTerm::new("BREAD")));
        assert!(!service.matches(&SearchTerm::new("pizza")));
    }

    #[test]
    fn should_clear_description_when_answer_is_blank() {
        let changes = service().merge("", Some(""));
        assert_eq!(changes.name, "Casa do Pão");
        assert_eq!(changes.description.as_deref(), Some(""));
    }

    #[test]
    fn should_omit_description_when_prompt_dismissed() {
        let changes = service().merge("Padaria", None);
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Padaria"}));
    }

    #[test]
    fn should_emit_category_before_city_in_query_pairs() {
        let query = ServiceQuery::from_selects("3", "7").unwrap();
        assert_eq!(
            query.pairs(),
            vec![("category_id", "3".to_string()), ("city_id", "7".to_string())]
        );
    }

    #[test]
    fn should_omit_unset_filters() {
        let query = ServiceQuery::from_selects("", "7").unwrap();
        assert_eq!(query.pairs(), vec![("city_id", "7".to_string())]);
        assert!(ServiceQuery::default().pairs().is_empty());
    }
}
