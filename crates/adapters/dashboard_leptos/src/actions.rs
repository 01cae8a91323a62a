//! Glue between panel operations and a page's reactive state.
//!
//! Every operation runs on the local executor. A mutation the backend
//! accepted always shows its toast and resets its form; the re-list that
//! follows either replaces the cached rows or raises its own alert. A
//! rejected mutation shows a blocking alert and leaves the page as it was.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use listhub_app::panel::Panel;
use listhub_app::ports::Dialogs;
use listhub_app::resource::Resource;
use listhub_app::services::panel_service::Refresh;
use listhub_domain::error::ListHubError;

use crate::components::ToastProvider;
use crate::dialogs::WebDialogs;

/// Reactive handle on one resource panel.
pub struct PanelHandle<R: Resource + 'static> {
    panel: RwSignal<Panel<R>>,
    toasts: ToastProvider,
}

impl<R: Resource + 'static> Clone for PanelHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + 'static> Copy for PanelHandle<R> {}

impl<R> PanelHandle<R>
where
    R: Resource + Send + Sync + 'static,
    R::Query: Send + Sync,
{
    pub fn new(toasts: ToastProvider) -> Self {
        Self {
            panel: RwSignal::new(Panel::new()),
            toasts,
        }
    }

    /// Filters used by the last successful list call.
    pub fn query(&self) -> R::Query {
        self.panel.with_untracked(|panel| panel.query().clone())
    }

    /// Live search box value.
    pub fn search(&self) -> String {
        self.panel.with(|panel| panel.search().to_string())
    }

    pub fn set_search(&self, raw: String) {
        self.panel.update(|panel| panel.set_search(raw));
    }

    /// Rows matching the search term, tracked.
    pub fn visible(&self) -> Vec<R> {
        self.panel
            .with(|panel| panel.visible().into_iter().cloned().collect())
    }

    /// Store a list fetched outside of the handle's own operations.
    pub fn replace(&self, records: Vec<R>) {
        self.panel.try_update(|panel| panel.replace(records));
    }

    /// First fetch of the page. `loaded` flips once the call settles,
    /// whatever the outcome.
    pub fn load<F>(self, op: F, loaded: RwSignal<bool>)
    where
        F: Future<Output = Result<Vec<R>, ListHubError>> + 'static,
    {
        spawn_local(async move {
            match op.await {
                Ok(records) => {
                    self.panel.try_update(|panel| panel.replace(records));
                }
                Err(err) => report(&err),
            }
            loaded.try_set(true);
        });
    }

    /// Run a mutation and settle its outcome.
    ///
    /// `Ok(None)` means the operator cancelled: nothing changes. Once the
    /// backend accepted the change, the toast shows and `after` runs even if
    /// the re-list failed.
    pub fn mutate<F, A>(self, success: &'static str, op: F, after: A)
    where
        F: Future<Output = Result<Option<Refresh<R>>, ListHubError>> + 'static,
        A: FnOnce() + 'static,
    {
        spawn_local(async move {
            match op.await {
                Ok(Some(refresh)) => {
                    self.toasts.push(success);
                    after();
                    match refresh {
                        Refresh::Fresh(records) => self.replace(records),
                        Refresh::Stale(err) => report(&err),
                    }
                }
                Ok(None) => tracing::debug!(collection = R::COLLECTION, "operation cancelled"),
                Err(err) => report(&err),
            }
        });
    }

    /// Re-list with new filters. The list and its filters are stored
    /// together, and `after` runs, only when the call succeeded.
    pub fn relist<F, A>(self, query: R::Query, op: F, after: A)
    where
        F: Future<Output = Result<Vec<R>, ListHubError>> + 'static,
        A: FnOnce() + 'static,
    {
        spawn_local(async move {
            let outcome = op.await;
            match self
                .panel
                .try_update(|panel| panel.apply_filtered(outcome, query))
            {
                Some(Ok(())) => after(),
                Some(Err(err)) => report(&err),
                None => {}
            }
        });
    }
}

/// Surface a failure to the operator.
pub fn report(err: &ListHubError) {
    tracing::warn!(error = %err, "operation failed");
    WebDialogs.alert(&err.to_string());
}
