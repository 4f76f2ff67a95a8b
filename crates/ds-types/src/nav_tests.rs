//! Unit tests for affordance visibility and activation.

use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    menu::{MenuAnchor, MenuState},
    state::AppState,
};

fn page(is_editable: bool, in_edit: bool, is_dirty: bool) -> PageContract {
    PageContract {
        is_editable,
        in_edit,
        is_dirty,
        ..PageContract::default()
    }
}

fn counter() -> (Rc<Cell<u32>>, Handler) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, Handler::new(move || inner.set(inner.get() + 1)))
}

#[test]
fn test_nothing_when_signed_out() {
    for (editable, in_edit, dirty) in [(false, false, false), (true, false, true), (true, true, true)] {
        assert!(visible_affordances(EditMode::resolve(false, &page(editable, in_edit, dirty)), dirty, true).is_empty());
    }
}

#[test]
fn test_nothing_when_read_only() {
    let mode = EditMode::resolve(true, &page(false, false, true));
    assert_eq!(mode, EditMode::ReadOnly);
    assert!(visible_affordances(mode, true, true).is_empty());
}

#[test]
fn test_viewing_offers_edit_only() {
    let data = DataContract::default();
    assert_eq!(affordances_for(true, &page(true, false, false), &data), vec![Affordance::Edit]);
}

#[test]
fn test_viewing_with_dirty_data_offers_publish() {
    let data = DataContract {
        is_dirty: true,
        ..DataContract::default()
    };
    assert_eq!(affordances_for(true, &page(true, false, false), &data), vec![Affordance::Edit, Affordance::Publish]);
}

#[test]
fn test_editing_clean_page() {
    assert_eq!(
        visible_affordances(EditMode::Editing, false, false),
        vec![Affordance::Insert, Affordance::Cancel]
    );
}

#[test]
fn test_editing_dirty_page_and_data() {
    assert_eq!(
        visible_affordances(EditMode::Editing, true, true),
        vec![Affordance::Insert, Affordance::Save, Affordance::Cancel, Affordance::Publish]
    );
}

#[test]
fn test_edit_enters_edit_mode() {
    let mut state = AppState::default();
    state.page.is_editable = true;

    let handlers = EditHandlers::capture(&state.page, &state.data);
    let patch = Affordance::Edit.activate(&handlers).unwrap();
    state.apply_page(patch);

    assert!(state.page.in_edit);
    assert_eq!(affordances_for(true, &state.page, &state.data), vec![Affordance::Insert, Affordance::Cancel]);
}

#[test]
fn test_save_vetoed_keeps_edit_state() {
    let mut current = page(true, true, true);
    current.on_save = Some(Handler::new(|| false));

    let handlers = EditHandlers::capture(&current, &DataContract::default());
    assert!(Affordance::Save.activate(&handlers).is_none());
    assert!(current.in_edit);
    assert!(current.is_dirty);
}

#[test]
fn test_save_accepted_leaves_edit_mode() {
    let mut current = page(true, true, true);
    current.on_save = Some(Handler::new(|| true));

    let handlers = EditHandlers::capture(&current, &DataContract::default());
    Affordance::Save.activate(&handlers).unwrap().apply(&mut current);
    assert!(!current.in_edit);
    assert!(!current.is_dirty);
}

#[test]
fn test_save_without_handler_leaves_edit_mode() {
    let mut current = page(true, true, true);
    let handlers = EditHandlers::capture(&current, &DataContract::default());
    Affordance::Save.activate(&handlers).unwrap().apply(&mut current);
    assert!(!current.in_edit);
    assert!(!current.is_dirty);
}

#[test]
fn test_cancel_runs_handler_then_resets() {
    let (hits, on_cancel) = counter();
    let mut current = page(true, true, true);
    current.on_cancel = Some(on_cancel);

    let handlers = EditHandlers::capture(&current, &DataContract::default());
    Affordance::Cancel.activate(&handlers).unwrap().apply(&mut current);

    assert_eq!(hits.get(), 1);
    assert!(!current.in_edit);
    assert!(!current.is_dirty);
}

#[test]
fn test_insert_and_publish_only_call_back() {
    let (inserts, on_insert) = counter();
    let (publishes, publish) = counter();
    let mut current = page(true, true, true);
    current.on_insert = Some(on_insert);
    let data = DataContract {
        is_dirty: true,
        publish,
        ..DataContract::default()
    };

    let handlers = EditHandlers::capture(&current, &data);
    assert!(Affordance::Insert.activate(&handlers).is_none());
    assert!(Affordance::Publish.activate(&handlers).is_none());

    assert_eq!(inserts.get(), 1);
    assert_eq!(publishes.get(), 1);
}

fn open_menus() -> MenuState {
    let mut menu = MenuState::default();
    menu.open(MenuAnchor::Left);
    menu.open(MenuAnchor::Right);
    menu
}

#[test]
fn test_edit_from_menu_enters_edit_mode_and_closes_menus() {
    let mut state = AppState::default();
    state.page.is_editable = true;
    let mut menu = open_menus();

    let handlers = EditHandlers::capture(&state.page, &state.data);
    state.apply_page(Affordance::Edit.invoke(&handlers, &mut menu).unwrap());

    assert!(state.page.in_edit);
    assert!(!menu.any_open());
}

#[test]
fn test_every_affordance_closes_menus() {
    let (_, on_insert) = counter();
    let (_, on_cancel) = counter();
    let (_, publish) = counter();
    let mut current = page(true, true, true);
    current.on_insert = Some(on_insert);
    current.on_cancel = Some(on_cancel);
    let data = DataContract {
        is_dirty: true,
        publish,
        ..DataContract::default()
    };

    for affordance in [Affordance::Edit, Affordance::Insert, Affordance::Save, Affordance::Cancel, Affordance::Publish] {
        let mut menu = open_menus();
        let _ = affordance.invoke(&EditHandlers::capture(&current, &data), &mut menu);
        assert!(!menu.any_open(), "{affordance:?} left a menu open");
    }
}

#[test]
fn test_vetoed_save_still_closes_menus() {
    let mut current = page(true, true, true);
    current.on_save = Some(Handler::new(|| false));
    let mut menu = open_menus();

    let handlers = EditHandlers::capture(&current, &DataContract::default());
    assert!(Affordance::Save.invoke(&handlers, &mut menu).is_none());
    assert!(!menu.any_open());
    assert!(current.in_edit);
    assert!(current.is_dirty);
}

#[test]
fn test_toolbar_width_is_capped() {
    assert_eq!(toolbar_width(800.0), 800.0);
    assert_eq!(toolbar_width(1920.0), TOOLBAR_MAX_WIDTH);
    assert!(is_mobile(899.0));
    assert!(!is_mobile(900.0));
}
