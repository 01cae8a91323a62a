//! The fetch/render/mutate cycle shared by every panel.
//!
//! Each mutation validates client-side, calls the backend, then re-lists the
//! collection with the panel's filters. A mutation the backend accepted
//! returns `Ok` whatever the re-list does: the [`Refresh`] carries either
//! the fresh list for the caller's [`Panel`](crate::panel::Panel) or the
//! list error. A rejected mutation returns an error and leaves the caller's
//! state untouched. `Ok(None)` means the operator cancelled before any
//! request was sent.

use listhub_domain::category::Category;
use listhub_domain::city::City;
use listhub_domain::error::{ListHubError, ValidationError};
use listhub_domain::form::Form;
use listhub_domain::id;
use listhub_domain::service::{Service, ServiceQuery};

use crate::client::ApiClient;
use crate::ports::{Dialogs, Transport};
use crate::resource::{Resource, WithAsset};

/// Everything the services panel needs before it can render.
#[derive(Debug, Clone, Default)]
pub struct ServiceView {
    pub cities: Vec<City>,
    pub categories: Vec<Category>,
    pub services: Vec<Service>,
}

/// List state after a mutation the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Refresh<R> {
    /// The re-list succeeded.
    Fresh(Vec<R>),
    /// The mutation landed but the re-list failed; the cached list is stale.
    Stale(ListHubError),
}

impl<R> Refresh<R> {
    /// The fresh list, or the re-list error.
    ///
    /// # Errors
    ///
    /// Returns the re-list failure of a [`Refresh::Stale`].
    pub fn into_result(self) -> Result<Vec<R>, ListHubError> {
        match self {
            Self::Fresh(records) => Ok(records),
            Self::Stale(err) => Err(err),
        }
    }
}

/// Application service driving the resource panels.
#[derive(Debug, Clone)]
pub struct PanelService<T> {
    client: ApiClient<T>,
}

impl<T: Transport> PanelService<T> {
    /// Create a new service backed by the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            client: ApiClient::new(transport),
        }
    }

    /// Fetch the current list with the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Request`] when the list call fails.
    pub async fn list<R: Resource>(&self, query: &R::Query) -> Result<Vec<R>, ListHubError> {
        let records = self.client.list::<R>(query).await.inspect_err(|err| {
            tracing::warn!(collection = R::COLLECTION, error = %err, "list failed");
        })?;
        tracing::debug!(
            collection = R::COLLECTION,
            count = records.len(),
            "fetched records"
        );
        Ok(records)
    }

    async fn refresh<R: Resource>(&self, query: &R::Query) -> Refresh<R> {
        match self.list(query).await {
            Ok(records) => Refresh::Fresh(records),
            Err(err) => Refresh::Stale(err),
        }
    }

    /// Fetch cities, categories and services concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first failure among the three calls.
    pub async fn load_service_view(
        &self,
        query: &ServiceQuery,
    ) -> Result<ServiceView, ListHubError> {
        let (cities, categories, services) = futures::try_join!(
            self.list::<City>(&()),
            self.list::<Category>(&()),
            self.list::<Service>(query),
        )?;
        Ok(ServiceView {
            cities,
            categories,
            services,
        })
    }

    /// Validate the form, create the record, and re-list.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Validation`] without calling the backend
    /// when the form is incomplete, or [`ListHubError::Request`] when the
    /// create call fails.
    pub async fn create<R: Resource>(
        &self,
        form: R::Form,
        query: &R::Query,
    ) -> Result<Refresh<R>, ListHubError> {
        let draft = form.into_draft()?;
        let created: R = self.client.create::<R>(&draft).await?;
        tracing::info!(collection = R::COLLECTION, id = %created.id(), "record created");
        Ok(self.refresh(query).await)
    }

    /// Prompt for new values, update the record, and re-list.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Validation`] for unacceptable answers, or
    /// [`ListHubError::Request`] when the update call fails.
    pub async fn edit<R: Resource, D: Dialogs>(
        &self,
        dialogs: &D,
        record: &R,
        query: &R::Query,
    ) -> Result<Option<Refresh<R>>, ListHubError> {
        let Some(changes) = record.prompt_changes(dialogs)? else {
            return Ok(None);
        };
        self.client.update::<R>(record.id(), &changes).await?;
        tracing::info!(collection = R::COLLECTION, id = %record.id(), "record updated");
        Ok(Some(self.refresh(query).await))
    }

    /// Confirm, delete the record, and re-list.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Request`] when the delete call fails.
    pub async fn delete<R: Resource, D: Dialogs>(
        &self,
        dialogs: &D,
        id: R::Id,
        query: &R::Query,
    ) -> Result<Option<Refresh<R>>, ListHubError> {
        if !dialogs.confirm(&format!("Are you sure you want to delete this {}?", R::NOUN)) {
            return Ok(None);
        }
        self.client.delete::<R>(id).await?;
        tracing::info!(collection = R::COLLECTION, %id, "record deleted");
        Ok(Some(self.refresh(query).await))
    }

    /// Upload an image for the record whose id was typed in `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Validation`] without calling the backend
    /// when the id or the file is missing, or [`ListHubError::Request`]
    /// when the upload fails.
    pub async fn upload_asset<R: WithAsset>(
        &self,
        target: &str,
        file: Option<T::File>,
        query: &R::Query,
    ) -> Result<Refresh<R>, ListHubError> {
        let id: R::Id = id::parse_required(target, "id")?;
        let file = file.ok_or(ValidationError::MissingField("file"))?;
        let url = self.client.upload_asset::<R>(id, file).await?;
        tracing::info!(
            collection = R::COLLECTION,
            %id,
            asset = R::ASSET,
            url = url.as_deref().unwrap_or_default(),
            "asset uploaded"
        );
        Ok(self.refresh(query).await)
    }

    /// Confirm, remove the record's image, and re-list.
    ///
    /// # Errors
    ///
    /// Returns [`ListHubError::Request`] when the removal fails.
    pub async fn remove_asset<R: WithAsset, D: Dialogs>(
        &self,
        dialogs: &D,
        id: R::Id,
        query: &R::Query,
    ) -> Result<Option<Refresh<R>>, ListHubError> {
        let question = format!(
            "Are you sure you want to remove the {} of this {}?",
            R::ASSET,
            R::NOUN
        );
        if !dialogs.confirm(&question) {
            return Ok(None);
        }
        self.client.remove_asset::<R>(id).await?;
        tracing::info!(collection = R::COLLECTION, %id, asset = R::ASSET, "asset removed");
        Ok(Some(self.refresh(query).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;
    use crate::ports::transport::Query;
    use listhub_domain::city::CityForm;
    use listhub_domain::error::RequestError;
    use listhub_domain::id::{CategoryId, CityId, ServiceId, UserId};
    use listhub_domain::user::{User, UserForm};
    use serde_json::{Value, json};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String, Vec<(&'static str, String)>),
        Post(String, Value),
        Put(String, Value),
        Delete(String),
        Upload(String, &'static str),
    }

    type Responses = HashMap<(&'static str, String), Result<Value, RequestError>>;

    /// Records every call and answers from canned responses.
    #[derive(Clone, Default)]
    struct FakeBackend {
        calls: Rc<RefCell<Vec<Call>>>,
        responses: Rc<RefCell<Responses>>,
    }

    impl FakeBackend {
        fn respond(&self, method: &'static str, path: &str, result: Result<Value, RequestError>) {
            self.responses
                .borrow_mut()
                .insert((method, path.to_string()), result);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn answer(&self, method: &'static str, path: &str, call: Call) -> Result<Value, RequestError> {
            self.calls.borrow_mut().push(call);
            self.responses
                .borrow()
                .get(&(method, path.to_string()))
                .cloned()
                .unwrap_or_else(|| Err(RequestError::status(404, "Not Found")))
        }
    }

    impl Transport for FakeBackend {
        type File = &'static str;

        async fn get(&self, path: &str, query: &Query) -> Result<Value, RequestError> {
            self.answer("GET", path, Call::Get(path.to_string(), query.to_vec()))
        }

        async fn post(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
            self.answer("POST", path, Call::Post(path.to_string(), body.clone()))
        }

        async fn put(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
            self.answer("PUT", path, Call::Put(path.to_string(), body.clone()))
        }

        async fn delete(&self, path: &str) -> Result<Value, RequestError> {
            self.answer("DELETE", path, Call::Delete(path.to_string()))
        }

        async fn upload(&self, path: &str, file: &'static str) -> Result<Value, RequestError> {
            self.answer("POST", path, Call::Upload(path.to_string(), file))
        }
    }

    /// Answers prompts from a script and confirmations with a fixed value.
    struct FakeDialogs {
        answers: RefCell<Vec<Option<&'static str>>>,
        confirm: bool,
        confirmations: Cell<usize>,
    }

    impl FakeDialogs {
        fn new(answers: &[Option<&'static str>], confirm: bool) -> Self {
            Self {
                answers: RefCell::new(answers.iter().rev().copied().collect()),
                confirm,
                confirmations: Cell::new(0),
            }
        }
    }

    impl Dialogs for FakeDialogs {
        fn prompt(&self, _message: &str, _default: &str) -> Option<String> {
            self.answers
                .borrow_mut()
                .pop()
                .flatten()
                .map(str::to_string)
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirmations.set(self.confirmations.get() + 1);
            self.confirm
        }

        fn alert(&self, _message: &str) {}
    }

    fn setup() -> (FakeBackend, PanelService<FakeBackend>) {
        let backend = FakeBackend::default();
        (backend.clone(), PanelService::new(backend))
    }

    fn recife_json() -> Value {
        json!({"id": 1, "name": "Recife", "state": "PE"})
    }

    fn city_form(name: &str, state: &str) -> CityForm {
        CityForm {
            name: name.to_string(),
            state: state.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_city_then_list_it() {
        let (backend, svc) = setup();
        backend.respond("POST", "/cities", Ok(recife_json()));
        backend.respond("GET", "/cities", Ok(json!([recife_json()])));

        let cities: Vec<City> = svc
            .create(city_form("Recife", "PE"), &())
            .await
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].id, CityId::new(1));
        assert_eq!(cities[0].name, "Recife");
        assert_eq!(cities[0].state, "PE");
        assert_eq!(
            backend.calls(),
            vec![
                Call::Post(
                    "/cities".to_string(),
                    json!({"name": "Recife", "state": "PE"})
                ),
                Call::Get("/cities".to_string(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn should_report_create_even_when_relist_fails() {
        let (backend, svc) = setup();
        backend.respond("POST", "/cities", Ok(recife_json()));
        backend.respond("GET", "/cities", Err(RequestError::status(503, "list down")));
        let mut panel: Panel<City> = Panel::new();
        panel.replace(vec![]);

        let refresh = svc
            .create::<City>(city_form("Recife", "PE"), panel.query())
            .await
            .unwrap();

        assert_eq!(
            refresh,
            Refresh::Stale(ListHubError::Request(RequestError::status(503, "list down")))
        );
        assert_eq!(
            panel.apply(refresh.into_result()).unwrap_err().to_string(),
            "list down"
        );
        assert!(panel.records().is_empty());
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn should_not_call_backend_when_required_field_empty() {
        let (backend, svc) = setup();

        let result = svc.create::<City>(city_form("Recife", ""), &()).await;

        assert_eq!(
            result,
            Err(ListHubError::Validation(ValidationError::MissingField("state")))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_not_call_backend_when_email_invalid() {
        let (backend, svc) = setup();
        let form = UserForm {
            name: "Ana".to_string(),
            email: "ana.example.com".to_string(),
        };

        let result = svc.create::<User>(form, &()).await;

        assert_eq!(
            result,
            Err(ListHubError::Validation(ValidationError::InvalidEmail))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_surface_raw_body_and_keep_panel_when_create_fails() {
        let (backend, svc) = setup();
        backend.respond(
            "POST",
            "/users",
            Err(RequestError::status(400, "Email already registered")),
        );
        let mut panel: Panel<User> = Panel::new();
        panel.replace(vec![User {
            id: UserId::new(1),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: None,
        }]);
        let form = UserForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };

        let outcome = svc.create::<User>(form, panel.query()).await;
        let err = panel
            .apply(outcome.and_then(Refresh::into_result))
            .unwrap_err();

        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(panel.records().len(), 1);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn should_filter_services_by_category_and_city() {
        let (backend, svc) = setup();
        backend.respond(
            "GET",
            "/services",
            Ok(json!([{"id": 4, "name": "Padaria", "category_id": 3, "city_id": 7}])),
        );
        let mut panel: Panel<Service> = Panel::new();
        panel.replace(vec![]);
        panel.set_query(ServiceQuery::from_selects("3", "7").unwrap());

        let outcome = svc.list::<Service>(panel.query()).await;
        panel.apply(outcome).unwrap();

        assert_eq!(
            backend.calls(),
            vec![Call::Get(
                "/services".to_string(),
                vec![
                    ("category_id", "3".to_string()),
                    ("city_id", "7".to_string())
                ]
            )]
        );
        assert_eq!(panel.records().len(), 1);
        assert_eq!(panel.records()[0].id, ServiceId::new(4));
    }

    #[tokio::test]
    async fn should_load_service_view_from_three_lists() {
        let (backend, svc) = setup();
        backend.respond("GET", "/cities", Ok(json!([recife_json()])));
        backend.respond("GET", "/categories", Ok(json!([{"id": 3, "name": "Bakery"}])));
        backend.respond("GET", "/services", Ok(json!([])));

        let view = svc.load_service_view(&ServiceQuery::default()).await.unwrap();

        assert_eq!(view.cities.len(), 1);
        assert_eq!(view.categories[0].id, CategoryId::new(3));
        assert!(view.services.is_empty());
        assert_eq!(backend.calls().len(), 3);
    }

    #[tokio::test]
    async fn should_fail_service_view_when_any_list_fails() {
        let (backend, svc) = setup();
        backend.respond("GET", "/cities", Ok(json!([])));
        backend.respond("GET", "/services", Ok(json!([])));

        let result = svc.load_service_view(&ServiceQuery::default()).await;

        assert_eq!(
            result.unwrap_err(),
            ListHubError::Request(RequestError::status(404, "Not Found"))
        );
    }

    #[tokio::test]
    async fn should_send_merged_values_on_edit() {
        let (backend, svc) = setup();
        backend.respond("PUT", "/cities/1", Ok(json!({"id": 1, "name": "Recife", "state": "PB"})));
        backend.respond("GET", "/cities", Ok(json!([])));
        let city: City = serde_json::from_value(recife_json()).unwrap();
        let dialogs = FakeDialogs::new(&[Some(""), Some("PB")], true);

        let refreshed = svc.edit(&dialogs, &city, &()).await.unwrap();

        assert_eq!(refreshed, Some(Refresh::Fresh(vec![])));
        assert_eq!(
            backend.calls()[0],
            Call::Put(
                "/cities/1".to_string(),
                json!({"name": "Recife", "state": "PB"})
            )
        );
    }

    #[tokio::test]
    async fn should_not_call_backend_when_edit_cancelled() {
        let (backend, svc) = setup();
        let city: City = serde_json::from_value(recife_json()).unwrap();
        let dialogs = FakeDialogs::new(&[None], true);

        let outcome = svc.edit(&dialogs, &city, &()).await.unwrap();

        assert!(outcome.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_keep_panel_when_update_fails() {
        let (backend, svc) = setup();
        backend.respond("PUT", "/cities/1", Err(RequestError::status(404, "City not found")));
        let city: City = serde_json::from_value(recife_json()).unwrap();
        let mut panel: Panel<City> = Panel::new();
        panel.replace(vec![city.clone()]);
        let dialogs = FakeDialogs::new(&[Some("Olinda"), Some("PE")], true);

        let result = svc.edit(&dialogs, &city, &()).await;

        assert_eq!(result.unwrap_err().to_string(), "City not found");
        assert_eq!(panel.records(), std::slice::from_ref(&city));
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_after_confirmation() {
        let (backend, svc) = setup();
        backend.respond("DELETE", "/categories/3", Ok(json!({"message": "deleted"})));
        backend.respond("GET", "/categories", Ok(json!([])));
        let dialogs = FakeDialogs::new(&[], true);

        let refreshed = svc
            .delete::<Category, _>(&dialogs, CategoryId::new(3), &())
            .await
            .unwrap();

        assert_eq!(refreshed, Some(Refresh::Fresh(vec![])));
        assert_eq!(dialogs.confirmations.get(), 1);
        assert_eq!(backend.calls()[0], Call::Delete("/categories/3".to_string()));
    }

    #[tokio::test]
    async fn should_not_delete_when_declined() {
        let (backend, svc) = setup();
        let dialogs = FakeDialogs::new(&[], false);

        let outcome = svc
            .delete::<Category, _>(&dialogs, CategoryId::new(3), &())
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_surface_refusal_when_delete_rejected() {
        let (backend, svc) = setup();
        backend.respond(
            "DELETE",
            "/cities/1",
            Err(RequestError::status(400, "City is used by services")),
        );
        let city: City = serde_json::from_value(recife_json()).unwrap();
        let mut panel: Panel<City> = Panel::new();
        panel.replace(vec![city.clone()]);
        let dialogs = FakeDialogs::new(&[], true);

        let outcome = svc
            .delete::<City, _>(&dialogs, CityId::new(1), panel.query())
            .await
            .and_then(|refresh| refresh.map_or(Ok(vec![]), Refresh::into_result));
        let err = panel.apply(outcome).unwrap_err();

        assert_eq!(err.to_string(), "City is used by services");
        assert_eq!(panel.records(), std::slice::from_ref(&city));
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn should_upload_logo_to_nested_endpoint() {
        let (backend, svc) = setup();
        backend.respond(
            "POST",
            "/services/4/logo",
            Ok(json!({"logo_url": "https://cdn.test/logo.png"})),
        );
        backend.respond("GET", "/services", Ok(json!([])));

        let refresh = svc
            .upload_asset::<Service>(" 4 ", Some("logo.png"), &ServiceQuery::default())
            .await
            .unwrap();

        assert_eq!(refresh, Refresh::Fresh(vec![]));

        assert_eq!(
            backend.calls()[0],
            Call::Upload("/services/4/logo".to_string(), "logo.png")
        );
    }

    #[tokio::test]
    async fn should_not_upload_without_file() {
        let (backend, svc) = setup();

        let result = svc.upload_asset::<User>("4", None, &()).await;

        assert_eq!(
            result,
            Err(ListHubError::Validation(ValidationError::MissingField("file")))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_not_upload_without_target_id() {
        let (backend, svc) = setup();

        let result = svc.upload_asset::<User>("", Some("me.png"), &()).await;

        assert_eq!(
            result,
            Err(ListHubError::Validation(ValidationError::MissingField("id")))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn should_remove_avatar_after_confirmation() {
        let (backend, svc) = setup();
        backend.respond("DELETE", "/users/2/avatar", Ok(json!({"message": "removed"})));
        backend.respond("GET", "/users", Ok(json!([])));
        let dialogs = FakeDialogs::new(&[], true);

        let refreshed = svc
            .remove_asset::<User, _>(&dialogs, UserId::new(2), &())
            .await
            .unwrap();

        assert_eq!(refreshed, Some(Refresh::Fresh(vec![])));
        assert_eq!(backend.calls()[0], Call::Delete("/users/2/avatar".to_string()));
    }

    #[tokio::test]
    async fn should_report_undecodable_list_body() {
        let (backend, svc) = setup();
        backend.respond("GET", "/cities", Ok(json!({"detail": "oops"})));

        let err = svc.list::<City>(&()).await.unwrap_err();

        assert!(matches!(err, ListHubError::Request(RequestError { status: None, .. })));
    }
}
