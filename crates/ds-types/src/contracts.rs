//! The three application state slices.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{handler::Handler, version::VersionInfo};

/// Who is using the shell.
///
/// The default is a privileged placeholder, not a security boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContract {
    pub username: String,
    pub is_admin: bool,
}

impl Default for UserContract {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            is_admin: true,
        }
    }
}

/// Title and body of the page-level banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Application data shared by every page.
#[derive(Clone, Debug, PartialEq)]
pub struct DataContract {
    /// Unsaved edits exist somewhere in the application.
    pub is_dirty: bool,
    /// Filled by the bootstrap fetch, cleared when the session is lost.
    pub version: Option<VersionInfo>,
    /// Invoked by the navigation bar's Publish affordance.
    pub publish: Handler,
}

impl Default for DataContract {
    fn default() -> Self {
        Self {
            is_dirty: false,
            version: None,
            publish: Handler::new(|| warn!("publish is not implemented for this page")),
        }
    }
}

/// Per-page editing state and banner.
///
/// `in_edit` must only be set while `is_editable` holds; the navigation bar
/// never offers Edit otherwise, but the store does not check it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContract {
    pub is_editable: bool,
    pub in_edit: bool,
    pub is_dirty: bool,
    pub error_message: Option<ErrorMessage>,
    /// Returning `false` aborts the save.
    pub on_save: Option<Handler<bool>>,
    pub on_cancel: Option<Handler>,
    pub on_insert: Option<Handler>,
}
