//! # listhub-dashboard
//!
//! Browser admin panel for the ListHub directory backend, built with Leptos
//! (client-side rendering, compiled to wasm32).
//!
//! One page per resource (cities, categories, services, users), each with a
//! create form, a search box and a table with row actions. All backend calls
//! go through [`listhub_app::services::panel_service::PanelService`] over the
//! [`transport::GlooTransport`]; operator prompts go through
//! [`dialogs::WebDialogs`].

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use listhub_app::endpoint::Endpoints;
use listhub_app::services::panel_service::PanelService;

mod actions;
mod components;
pub mod dialogs;
mod pages;
pub mod transport;

use components::{Nav, ToastContainer};
use pages::{Categories, Cities, NotFound, Services, Users};
use transport::GlooTransport;

/// Panel service as provided through Leptos context.
pub type Api = PanelService<GlooTransport>;

/// Access the panel service from Leptos context.
///
/// Must be called within the [`App`] component tree.
pub fn use_api() -> Api {
    use_context::<Api>().expect("PanelService not found in context")
}

/// Backend origin for the page's hostname, chosen once at start-up.
fn backend_origin() -> String {
    let hostname = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default();
    let endpoints =
        Endpoints::default().with_remote_override(option_env!("LISTHUB_REMOTE_API_URL"));
    let origin = endpoints.select(&hostname).to_string();
    tracing::info!(%hostname, %origin, "backend selected");
    origin
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(Api::new(GlooTransport::new(backend_origin())));

    view! {
        <ToastContainer>
            <Router>
                <header>
                    <h1>"ListHub admin"</h1>
                    <Nav/>
                </header>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Services/>
                        <Route path=path!("cities") view=Cities/>
                        <Route path=path!("categories") view=Categories/>
                        <Route path=path!("services") view=Services/>
                        <Route path=path!("users") view=Users/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
