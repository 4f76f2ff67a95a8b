//! Shared type definitions for the dashboard shell
//!
//! This crate holds the framework-free pieces of the web UI: the three
//! application state slices and their partial updates, the session snapshot
//! published by the identity adapter, the backend version descriptor, and the
//! navigation bar's affordance and menu models. Nothing here depends on the
//! rendering layer, so it builds and tests on any target.

pub mod contracts;
pub mod handler;
pub mod menu;
pub mod nav;
pub mod patch;
pub mod session;
pub mod state;
pub mod version;

pub use contracts::{DataContract, ErrorMessage, PageContract, UserContract};
pub use handler::Handler;
pub use patch::{DataPatch, PagePatch, UserPatch};
pub use state::{AppState, StateSink};
pub use version::VersionInfo;
