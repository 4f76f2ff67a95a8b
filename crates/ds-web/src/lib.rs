//! Dashboard shell web entrypoint and common exports.
//!
//! This crate hosts the Dioxus UI: the application store, the session and
//! version bootstrap, the page frame with its navigation bar, and the routes.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, pages, routes, routes::Routes};
