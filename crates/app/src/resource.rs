//! The four resource kinds the panel manages, described uniformly.
//!
//! A [`Resource`] ties a domain record to its collection path, its create
//! form, its update body, its list filters, and the prompts used to edit it.
//! [`WithAsset`] adds the nested upload endpoint of services and users.

use std::fmt;
use std::str::FromStr;

use listhub_domain::category::{Category, CategoryChanges, CategoryForm};
use listhub_domain::city::{City, CityChanges, CityForm};
use listhub_domain::error::ValidationError;
use listhub_domain::form::Form;
use listhub_domain::id::{CategoryId, CityId, ServiceId, UserId};
use listhub_domain::search::Searchable;
use listhub_domain::service::{Service, ServiceChanges, ServiceForm, ServiceQuery};
use listhub_domain::user::{User, UserChanges, UserForm};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::Dialogs;

/// A record kind backed by a REST collection.
pub trait Resource: Searchable + DeserializeOwned + Clone {
    type Id: Copy + Eq + fmt::Display + FromStr;
    /// Raw create-form input.
    type Form: Form;
    /// Body of `PUT /{collection}/{id}`.
    type Changes: Serialize;
    /// Filters for `GET /{collection}`.
    type Query: Clone + Default + fmt::Debug;

    /// Collection segment, e.g. `cities`.
    const COLLECTION: &'static str;
    /// Singular noun for operator messages, e.g. `city`.
    const NOUN: &'static str;

    fn id(&self) -> Self::Id;

    /// Query-string pairs for a list call.
    fn query_pairs(query: &Self::Query) -> Vec<(&'static str, String)>;

    /// Prompt for each mutable field, pre-filled with the current value.
    ///
    /// Returns `Ok(None)` when the operator cancels a prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when an answer is unacceptable.
    fn prompt_changes<D: Dialogs>(
        &self,
        dialogs: &D,
    ) -> Result<Option<Self::Changes>, ValidationError>;
}

/// A resource with a single uploadable image.
pub trait WithAsset: Resource {
    /// Nested segment, e.g. `logo`.
    const ASSET: &'static str;

    fn asset_url(&self) -> Option<&str>;

    /// Table text shown when no image is set, e.g. `No logo`.
    #[must_use]
    fn missing_asset() -> String {
        format!("No {}", Self::ASSET)
    }
}

impl Resource for City {
    type Id = CityId;
    type Form = CityForm;
    type Changes = CityChanges;
    type Query = ();

    const COLLECTION: &'static str = "cities";
    const NOUN: &'static str = "city";

    fn id(&self) -> CityId {
        self.id
    }

    fn query_pairs(_: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn prompt_changes<D: Dialogs>(&self, dialogs: &D) -> Result<Option<CityChanges>, ValidationError> {
        let Some(name) = dialogs.prompt("New city name:", &self.name) else {
            return Ok(None);
        };
        let Some(state) = dialogs.prompt("New state:", &self.state) else {
            return Ok(None);
        };
        Ok(Some(self.merge(&name, &state)))
    }
}

impl Resource for Category {
    type Id = CategoryId;
    type Form = CategoryForm;
    type Changes = CategoryChanges;
    type Query = ();

    const COLLECTION: &'static str = "categories";
    const NOUN: &'static str = "category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn query_pairs(_: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn prompt_changes<D: Dialogs>(
        &self,
        dialogs: &D,
    ) -> Result<Option<CategoryChanges>, ValidationError> {
        Ok(dialogs
            .prompt("New category name:", &self.name)
            .map(|name| self.merge(&name)))
    }
}

impl Resource for Service {
    type Id = ServiceId;
    type Form = ServiceForm;
    type Changes = ServiceChanges;
    type Query = ServiceQuery;

    const COLLECTION: &'static str = "services";
    const NOUN: &'static str = "service";

    fn id(&self) -> ServiceId {
        self.id
    }

    fn query_pairs(query: &ServiceQuery) -> Vec<(&'static str, String)> {
        query.pairs()
    }

    fn prompt_changes<D: Dialogs>(
        &self,
        dialogs: &D,
    ) -> Result<Option<ServiceChanges>, ValidationError> {
        let Some(name) = dialogs.prompt("New service name:", &self.name) else {
            return Ok(None);
        };
        // Dismissing the description prompt leaves the description as is.
        let description = dialogs.prompt(
            "New description:",
            self.description.as_deref().unwrap_or_default(),
        );
        Ok(Some(self.merge(&name, description.as_deref())))
    }
}

impl WithAsset for Service {
    const ASSET: &'static str = "logo";

    fn asset_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }
}

impl Resource for User {
    type Id = UserId;
    type Form = UserForm;
    type Changes = UserChanges;
    type Query = ();

    const COLLECTION: &'static str = "users";
    const NOUN: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn query_pairs(_: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn prompt_changes<D: Dialogs>(&self, dialogs: &D) -> Result<Option<UserChanges>, ValidationError> {
        let Some(name) = dialogs.prompt("New user name:", &self.name) else {
            return Ok(None);
        };
        let Some(email) = dialogs.prompt("New email:", &self.email) else {
            return Ok(None);
        };
        self.merge(&name, &email).map(Some)
    }
}

impl WithAsset for User {
    const ASSET: &'static str = "avatar";

    fn asset_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

/// `/{collection}`
#[must_use]
pub fn collection_path<R: Resource>() -> String {
    format!("/{}", R::COLLECTION)
}

/// `/{collection}/{id}`
#[must_use]
pub fn item_path<R: Resource>(id: R::Id) -> String {
    format!("/{}/{id}", R::COLLECTION)
}

/// `/{collection}/{id}/{asset}`
#[must_use]
pub fn asset_path<R: WithAsset>(id: R::Id) -> String {
    format!("/{}/{id}/{}", R::COLLECTION, R::ASSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers prompts from a script; `None` entries cancel.
    struct Scripted(RefCell<VecDeque<Option<&'static str>>>);

    impl Scripted {
        fn new(answers: &[Option<&'static str>]) -> Self {
            Self(RefCell::new(answers.iter().copied().collect()))
        }
    }

    impl Dialogs for Scripted {
        fn prompt(&self, _message: &str, _default: &str) -> Option<String> {
            self.0
                .borrow_mut()
                .pop_front()
                .flatten()
                .map(str::to_string)
        }

        fn confirm(&self, _message: &str) -> bool {
            true
        }

        fn alert(&self, _message: &str) {}
    }

    fn recife() -> City {
        City {
            id: CityId::new(1),
            name: "Recife".to_string(),
            state: "PE".to_string(),
        }
    }

    fn user() -> User {
        User {
            id: UserId::new(9),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn should_name_missing_image_after_its_asset() {
        assert_eq!(Service::missing_asset(), "No logo");
        assert_eq!(User::missing_asset(), "No avatar");
    }

    #[test]
    fn should_build_nested_paths() {
        assert_eq!(collection_path::<City>(), "/cities");
        assert_eq!(item_path::<Category>(CategoryId::new(4)), "/categories/4");
        assert_eq!(asset_path::<Service>(ServiceId::new(2)), "/services/2/logo");
        assert_eq!(asset_path::<User>(UserId::new(3)), "/users/3/avatar");
    }

    #[test]
    fn should_abort_city_edit_when_second_prompt_cancelled() {
        let dialogs = Scripted::new(&[Some("Olinda"), None]);
        assert_eq!(recife().prompt_changes(&dialogs), Ok(None));
    }

    #[test]
    fn should_merge_city_answers() {
        let dialogs = Scripted::new(&[Some("Olinda"), Some("")]);
        let changes = recife().prompt_changes(&dialogs).unwrap().unwrap();
        assert_eq!(changes.name, "Olinda");
        assert_eq!(changes.state, "PE");
    }

    #[test]
    fn should_reject_user_edit_with_invalid_email() {
        let dialogs = Scripted::new(&[Some("Ana"), Some("broken")]);
        assert_eq!(
            user().prompt_changes(&dialogs),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn should_keep_service_description_when_its_prompt_is_dismissed() {
        let service: Service = serde_json::from_str(
            r#"{"id": 2, "name": "Padaria", "description": "Bread", "category_id": 1, "city_id": 1}"#,
        )
        .unwrap();
        let dialogs = Scripted::new(&[Some("Padaria Nova"), None]);
        let changes = service.prompt_changes(&dialogs).unwrap().unwrap();
        assert_eq!(changes.name, "Padaria Nova");
        assert!(changes.description.is_none());
    }

    #[test]
    fn should_encode_service_filters_only() {
        let query = ServiceQuery {
            category_id: Some(CategoryId::new(3)),
            city_id: None,
        };
        assert_eq!(
            Service::query_pairs(&query),
            vec![("category_id", "3".to_string())]
        );
        assert!(City::query_pairs(&()).is_empty());
    }
}
