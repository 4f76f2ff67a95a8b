//! Headless application state and the update seam shared with the UI store.

use std::{cell::RefCell, rc::Rc};

use tracing::trace;

use crate::{
    contracts::{DataContract, PageContract, UserContract},
    patch::{DataPatch, PagePatch, UserPatch},
};

/// Snapshot of all three slices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub user: UserContract,
    pub data: DataContract,
    pub page: PageContract,
}

impl AppState {
    pub fn apply_user(&mut self, patch: UserPatch) {
        patch.apply(&mut self.user);
    }

    pub fn apply_data(&mut self, patch: DataPatch) {
        patch.apply(&mut self.data);
    }

    pub fn apply_page(&mut self, patch: PagePatch) {
        patch.apply(&mut self.page);
    }
}

/// The three merge-update operations of the application store.
///
/// Implemented by the reactive store in the web crate and by
/// `RefCell<AppState>` for headless use.
pub trait StateSink {
    fn update_user(&self, patch: UserPatch);
    fn update_data(&self, patch: DataPatch);
    fn update_page(&self, patch: PagePatch);
}

impl StateSink for RefCell<AppState> {
    fn update_user(&self, patch: UserPatch) {
        trace!(?patch, "update user");
        self.borrow_mut().apply_user(patch);
    }

    fn update_data(&self, patch: DataPatch) {
        trace!(?patch, "update data");
        self.borrow_mut().apply_data(patch);
    }

    fn update_page(&self, patch: PagePatch) {
        trace!(?patch, "update page");
        self.borrow_mut().apply_page(patch);
    }
}

impl<S: StateSink + ?Sized> StateSink for &S {
    fn update_user(&self, patch: UserPatch) {
        (**self).update_user(patch);
    }

    fn update_data(&self, patch: DataPatch) {
        (**self).update_data(patch);
    }

    fn update_page(&self, patch: PagePatch) {
        (**self).update_page(patch);
    }
}

impl<S: StateSink + ?Sized> StateSink for Rc<S> {
    fn update_user(&self, patch: UserPatch) {
        (**self).update_user(patch);
    }

    fn update_data(&self, patch: DataPatch) {
        (**self).update_data(patch);
    }

    fn update_page(&self, patch: PagePatch) {
        (**self).update_page(patch);
    }
}
