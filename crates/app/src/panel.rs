//! Per-panel state: the cached list, the search term, and the list filters.
//!
//! The cache is only ever replaced wholesale by a successful fetch. Search
//! narrows what is shown without touching the cache or the backend.

use listhub_domain::search::{self, SearchTerm};

use crate::resource::Resource;

/// State owned by one resource panel instance.
#[derive(Debug, Clone)]
pub struct Panel<R: Resource> {
    records: Vec<R>,
    search: String,
    query: R::Query,
}

impl<R: Resource> Default for Panel<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            query: R::Query::default(),
        }
    }
}

impl<R: Resource> Panel<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cached record, in backend order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Raw search box input.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, raw: impl Into<String>) {
        self.search = raw.into();
    }

    /// Filters used for the next list call.
    #[must_use]
    pub fn query(&self) -> &R::Query {
        &self.query
    }

    pub fn set_query(&mut self, query: R::Query) {
        self.query = query;
    }

    /// Replace the cache with a freshly fetched list.
    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
    }

    /// Replace the cache on success; leave it untouched on failure.
    ///
    /// # Errors
    ///
    /// Passes the failure through unchanged.
    pub fn apply<E>(&mut self, outcome: Result<Vec<R>, E>) -> Result<(), E> {
        self.records = outcome?;
        Ok(())
    }

    /// Store a list fetched with new filters, and the filters with it, only
    /// when the fetch succeeded.
    ///
    /// # Errors
    ///
    /// Passes the failure through; records and filters stay as they were.
    pub fn apply_filtered<E>(
        &mut self,
        outcome: Result<Vec<R>, E>,
        query: R::Query,
    ) -> Result<(), E> {
        self.records = outcome?;
        self.query = query;
        Ok(())
    }

    /// Records matching the current search term.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        search::filter(&self.records, &SearchTerm::new(&self.search))
    }

    /// Cached record with the given id.
    #[must_use]
    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }
}
