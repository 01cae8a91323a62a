//! # listhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Transport` — JSON and multipart calls against the backend
//!   - `Dialogs` — blocking prompt / confirm / alert
//! - Describe the four record kinds uniformly (`Resource`, `WithAsset`)
//! - Hold per-panel state (`Panel`) and run the fetch/render/mutate cycle
//!   (`PanelService`)
//! - Select the backend origin and the active tab
//!
//! ## Dependency rule
//! Depends on `listhub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod client;
pub mod endpoint;
pub mod navigation;
pub mod panel;
pub mod ports;
pub mod resource;
pub mod services;
