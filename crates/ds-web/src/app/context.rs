//! The application state store as a component context.

use dioxus::prelude::*;
use ds_types::{
    DataContract, DataPatch, PageContract, PagePatch, StateSink, UserContract, UserPatch,
};
use tracing::trace;

use crate::app::config::AppConfig;

/// Reactive store: one signal per slice, so a page update does not re-render
/// components that only read `user`.
#[derive(Clone, Copy)]
pub struct AppContext {
    user: Signal<UserContract>,
    data: Signal<DataContract>,
    page: Signal<PageContract>,
}

impl AppContext {
    pub fn user(&self) -> Signal<UserContract> {
        self.user
    }

    pub fn data(&self) -> Signal<DataContract> {
        self.data
    }

    pub fn page(&self) -> Signal<PageContract> {
        self.page
    }
}

impl StateSink for AppContext {
    fn update_user(&self, patch: UserPatch) {
        trace!(?patch, "update user");
        let mut user = self.user;
        patch.apply(&mut user.write());
    }

    fn update_data(&self, patch: DataPatch) {
        trace!(?patch, "update data");
        let mut data = self.data;
        patch.apply(&mut data.write());
    }

    fn update_page(&self, patch: PagePatch) {
        trace!(?patch, "update page");
        let mut page = self.page;
        patch.apply(&mut page.write());
    }
}

/// Create the store with its defaults and provide it to the tree below.
pub fn use_app_context_provider() -> AppContext {
    let user = use_signal(UserContract::default);
    let data = use_signal(DataContract::default);
    let page = use_signal(PageContract::default);
    use_context_provider(|| AppContext { user, data, page })
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
