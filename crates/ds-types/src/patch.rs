//! Partial updates for the state slices.
//!
//! Every field is optional: `None` leaves the slice's value alone. Fields that
//! are themselves optional in the slice use `Option<Option<T>>` so that
//! "clear it" (`Some(None)`) stays distinct from "leave it" (`None`).

use crate::{
    contracts::{DataContract, ErrorMessage, PageContract, UserContract},
    handler::Handler,
    version::VersionInfo,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct UserPatch {
    pub username: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    pub fn apply(self, user: &mut UserContract) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct DataPatch {
    pub is_dirty: Option<bool>,
    pub version: Option<Option<VersionInfo>>,
    pub publish: Option<Handler>,
}

impl DataPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(mut self, is_dirty: bool) -> Self {
        self.is_dirty = Some(is_dirty);
        self
    }

    pub fn version(mut self, version: VersionInfo) -> Self {
        self.version = Some(Some(version));
        self
    }

    pub fn clear_version(mut self) -> Self {
        self.version = Some(None);
        self
    }

    pub fn publish(mut self, publish: Handler) -> Self {
        self.publish = Some(publish);
        self
    }

    pub fn apply(self, data: &mut DataContract) {
        if let Some(is_dirty) = self.is_dirty {
            data.is_dirty = is_dirty;
        }
        if let Some(version) = self.version {
            data.version = version;
        }
        if let Some(publish) = self.publish {
            data.publish = publish;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct PagePatch {
    pub is_editable: Option<bool>,
    pub in_edit: Option<bool>,
    pub is_dirty: Option<bool>,
    pub error_message: Option<Option<ErrorMessage>>,
    pub on_save: Option<Option<Handler<bool>>>,
    pub on_cancel: Option<Option<Handler>>,
    pub on_insert: Option<Option<Handler>>,
}

impl PagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editable(mut self, is_editable: bool) -> Self {
        self.is_editable = Some(is_editable);
        self
    }

    pub fn in_edit(mut self, in_edit: bool) -> Self {
        self.in_edit = Some(in_edit);
        self
    }

    pub fn is_dirty(mut self, is_dirty: bool) -> Self {
        self.is_dirty = Some(is_dirty);
        self
    }

    pub fn banner(mut self, message: ErrorMessage) -> Self {
        self.error_message = Some(Some(message));
        self
    }

    pub fn clear_banner(mut self) -> Self {
        self.error_message = Some(None);
        self
    }

    pub fn on_save(mut self, handler: Option<Handler<bool>>) -> Self {
        self.on_save = Some(handler);
        self
    }

    pub fn on_cancel(mut self, handler: Option<Handler>) -> Self {
        self.on_cancel = Some(handler);
        self
    }

    pub fn on_insert(mut self, handler: Option<Handler>) -> Self {
        self.on_insert = Some(handler);
        self
    }

    /// Leave edit mode, discarding the page's dirty flag.
    pub fn end_edit() -> Self {
        Self::new().in_edit(false).is_dirty(false)
    }

    pub fn apply(self, page: &mut PageContract) {
        if let Some(is_editable) = self.is_editable {
            page.is_editable = is_editable;
        }
        if let Some(in_edit) = self.in_edit {
            page.in_edit = in_edit;
        }
        if let Some(is_dirty) = self.is_dirty {
            page.is_dirty = is_dirty;
        }
        if let Some(error_message) = self.error_message {
            page.error_message = error_message;
        }
        if let Some(on_save) = self.on_save {
            page.on_save = on_save;
        }
        if let Some(on_cancel) = self.on_cancel {
            page.on_cancel = on_cancel;
        }
        if let Some(on_insert) = self.on_insert {
            page.on_insert = on_insert;
        }
    }
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
