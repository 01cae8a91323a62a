//! # listhub-domain
//!
//! Pure domain model for the listhub administration panel.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the records the backend serves: **Cities**, **Categories**,
//!   **Services** and **Users**
//! - Define the create forms and their client-side validation
//! - Define how edit answers merge over a current record
//! - Define the search box filter
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod form;
pub mod id;
pub mod search;

pub mod category;
pub mod city;
pub mod service;
pub mod user;
