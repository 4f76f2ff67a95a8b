//! Which edit affordances the navigation bar offers, and what they do.

use crate::{
    contracts::{DataContract, PageContract},
    handler::Handler,
    menu::MenuState,
    patch::PagePatch,
};

/// Below this window width the navigation bar collapses into menus.
pub const MOBILE_BREAKPOINT: f64 = 900.0;

/// Widest the toolbar is allowed to grow.
pub const TOOLBAR_MAX_WIDTH: f64 = 1200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Affordance {
    Edit,
    Insert,
    Save,
    Cancel,
    Publish,
}

impl Affordance {
    pub fn label(self) -> &'static str {
        match self {
            Affordance::Edit => "Edit",
            Affordance::Insert => "Insert",
            Affordance::Save => "Save",
            Affordance::Cancel => "Cancel",
            Affordance::Publish => "Publish",
        }
    }

    /// Run the affordance's callback and return the page update that follows.
    ///
    /// `None` means the page slice stays as it is, either because the
    /// affordance never changes it or because `on_save` vetoed the save.
    pub fn activate(self, handlers: &EditHandlers) -> Option<PagePatch> {
        match self {
            Affordance::Edit => Some(PagePatch::new().in_edit(true)),
            Affordance::Cancel => {
                if let Some(on_cancel) = &handlers.on_cancel {
                    on_cancel.call();
                }
                Some(PagePatch::end_edit())
            }
            Affordance::Save => match &handlers.on_save {
                Some(on_save) if !on_save.call() => None,
                _ => Some(PagePatch::end_edit()),
            },
            Affordance::Insert => {
                if let Some(on_insert) = &handlers.on_insert {
                    on_insert.call();
                }
                None
            }
            Affordance::Publish => {
                handlers.publish.call();
                None
            }
        }
    }

    /// What a click on the affordance does: [`Affordance::activate`], then
    /// every open menu closes, whether or not the page changed.
    pub fn invoke(self, handlers: &EditHandlers, menu: &mut MenuState) -> Option<PagePatch> {
        let patch = self.activate(handlers);
        menu.close_all();
        patch
    }
}

/// Editing posture of the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    NotAuthenticated,
    ReadOnly,
    Viewing,
    Editing,
}

impl EditMode {
    pub fn resolve(authenticated: bool, page: &PageContract) -> Self {
        match (authenticated, page.is_editable, page.in_edit) {
            (false, _, _) => EditMode::NotAuthenticated,
            (true, false, _) => EditMode::ReadOnly,
            (true, true, false) => EditMode::Viewing,
            (true, true, true) => EditMode::Editing,
        }
    }
}

/// Affordances offered for a mode, in display order.
pub fn visible_affordances(mode: EditMode, page_dirty: bool, data_dirty: bool) -> Vec<Affordance> {
    let mut visible = match mode {
        EditMode::NotAuthenticated | EditMode::ReadOnly => return Vec::new(),
        EditMode::Viewing => vec![Affordance::Edit],
        EditMode::Editing if page_dirty => vec![Affordance::Insert, Affordance::Save, Affordance::Cancel],
        EditMode::Editing => vec![Affordance::Insert, Affordance::Cancel],
    };
    if data_dirty {
        visible.push(Affordance::Publish);
    }
    visible
}

pub fn affordances_for(authenticated: bool, page: &PageContract, data: &DataContract) -> Vec<Affordance> {
    visible_affordances(EditMode::resolve(authenticated, page), page.is_dirty, data.is_dirty)
}

/// Callbacks lifted out of the slices so they can run without a borrow on them.
#[derive(Clone, Debug)]
pub struct EditHandlers {
    pub on_save: Option<Handler<bool>>,
    pub on_cancel: Option<Handler>,
    pub on_insert: Option<Handler>,
    pub publish: Handler,
}

impl EditHandlers {
    pub fn capture(page: &PageContract, data: &DataContract) -> Self {
        Self {
            on_save: page.on_save.clone(),
            on_cancel: page.on_cancel.clone(),
            on_insert: page.on_insert.clone(),
            publish: data.publish.clone(),
        }
    }
}

/// The toolbar follows the window up to its maximum width.
pub fn toolbar_width(window_width: f64) -> f64 {
    window_width.min(TOOLBAR_MAX_WIDTH)
}

pub fn is_mobile(window_width: f64) -> bool {
    window_width < MOBILE_BREAKPOINT
}

#[cfg(test)]
#[path = "nav_tests.rs"]
mod tests;
