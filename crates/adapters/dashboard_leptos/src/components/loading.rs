//! Placeholder shown until a page's first list call settles.

use leptos::prelude::*;

/// Spinner with a "Loading {what}…" caption.
#[component]
pub fn Loading(
    /// Plural noun of what is being fetched.
    what: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{format!("Loading {what}\u{2026}")}</span>
        </div>
    }
}
