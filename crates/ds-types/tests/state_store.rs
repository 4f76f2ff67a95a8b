//! The headless store behaves like the reactive one: each slice merges
//! independently through the `StateSink` operations.

use std::{cell::RefCell, rc::Rc};

use ds_types::{
    AppState, DataPatch, ErrorMessage, Handler, PagePatch, StateSink, UserPatch, VersionInfo,
    nav::{Affordance, EditHandlers, affordances_for},
};

fn drive(sink: &impl StateSink) {
    sink.update_user(UserPatch::new().username("operator"));
    sink.update_data(DataPatch::new().is_dirty(true));
    sink.update_page(PagePatch::new().is_editable(true).banner(ErrorMessage::new("Loading", "Please wait...")));
}

#[test]
fn test_slices_merge_independently() {
    let store = RefCell::new(AppState::default());
    drive(&store);

    let state = store.borrow();
    assert_eq!(state.user.username, "operator");
    assert!(state.user.is_admin);
    assert!(state.data.is_dirty);
    assert!(state.data.version.is_none());
    assert!(state.page.is_editable);
    assert!(!state.page.in_edit);
    assert!(!state.page.is_dirty);
    assert_eq!(state.page.error_message.as_ref().map(|m| m.title.as_str()), Some("Loading"));
}

#[test]
fn test_dirty_flags_are_not_reconciled() {
    let store = Rc::new(RefCell::new(AppState::default()));
    store.update_page(PagePatch::new().is_editable(true).in_edit(true).is_dirty(true));
    store.update_data(DataPatch::new().is_dirty(false));

    let state = store.borrow();
    assert!(state.page.is_dirty);
    assert!(!state.data.is_dirty);
}

#[test]
fn test_publish_handler_is_replaceable() {
    let published = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&published);
    let store = RefCell::new(AppState::default());

    store.update_data(DataPatch::new().is_dirty(true).publish(Handler::new(move || log.borrow_mut().push("published"))));
    store.update_page(PagePatch::new().is_editable(true));

    let (visible, handlers) = {
        let state = store.borrow();
        (affordances_for(true, &state.page, &state.data), EditHandlers::capture(&state.page, &state.data))
    };
    assert_eq!(visible, vec![Affordance::Edit, Affordance::Publish]);

    assert!(Affordance::Publish.activate(&handlers).is_none());
    assert_eq!(*published.borrow(), vec!["published"]);
}

#[test]
fn test_handler_may_update_the_store_it_came_from() {
    let store = Rc::new(RefCell::new(AppState::default()));
    let inner = Rc::clone(&store);
    store.update_page(
        PagePatch::new()
            .is_editable(true)
            .in_edit(true)
            .is_dirty(true)
            .on_save(Some(Handler::new(move || {
                inner.update_data(DataPatch::new().is_dirty(true).version(VersionInfo::default()));
                true
            }))),
    );

    let handlers = {
        let state = store.borrow();
        EditHandlers::capture(&state.page, &state.data)
    };
    if let Some(patch) = Affordance::Save.activate(&handlers) {
        store.update_page(patch);
    }

    let state = store.borrow();
    assert!(!state.page.in_edit);
    assert!(state.data.is_dirty);
    assert_eq!(state.data.version, Some(VersionInfo::default()));
}
