use leptos::prelude::*;

/// Displayed when no tab route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>
                <a href="/services">"Back to services"</a>
            </p>
        </div>
    }
}
