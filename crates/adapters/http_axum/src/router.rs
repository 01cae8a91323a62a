//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use listhub_app::navigation::Tab;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`] serving the panel from `assets`.
///
/// Tab routes (`/cities`, `/services`, …) answer `200` with `index.html`.
/// Other paths are looked up in `assets`; misses answer `404` with
/// `index.html` so the panel can render its own not-found page.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets: impl AsRef<Path>) -> Router {
    let assets = assets.as_ref();
    let index = assets.join("index.html");
    tracing::debug!(assets = %assets.display(), "serving panel assets");

    let router = Tab::ALL
        .into_iter()
        .fold(Router::new(), |router, tab| {
            router.route_service(&tab.path(), ServeFile::new(&index))
        });

    router
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new(assets).not_found_service(ServeFile::new(&index)))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
