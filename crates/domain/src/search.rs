//! Client-side search over an already-fetched list.
//!
//! Matching is a case-insensitive substring test against each record's
//! designated text fields. An empty term matches every record.

/// A normalized search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize raw search box input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` contains the term, ignoring case.
    #[must_use]
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

/// A record that can be filtered by the search box.
pub trait Searchable {
    /// The text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any search field contains `term`.
    fn matches(&self, term: &SearchTerm) -> bool {
        term.is_empty() || self.search_fields().into_iter().any(|f| term.matches(f))
    }
}

/// Keep the records matching `term`, preserving their order.
pub fn filter<'a, T: Searchable>(items: &'a [T], term: &SearchTerm) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(term)).collect()
}
