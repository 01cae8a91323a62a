//! # listhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled admin panel (`index.html`, wasm bundle, styles)
//!   from a directory on disk
//! - Answer every tab route with `index.html` so deep links load the panel
//! - Expose `/health` for process supervisors
//!
//! The panel itself talks to the backend directly from the browser; this
//! adapter never proxies API calls.
//!
//! ## Dependency rule
//! Depends on `listhub-app` for the tab routes only. Never leaks axum types
//! into the inner crates.

pub mod router;
