use std::{cell::Cell, rc::Rc};

use dioxus::{core::Task, prelude::*};
use ds_types::{
    StateSink,
    menu::{MenuAnchor, MenuState, close_when_idle},
    nav::{Affordance, EditHandlers, affordances_for, is_mobile, toolbar_width},
};
use tracing::debug;

use crate::{
    Routes,
    app::{
        auth::use_session,
        context::{use_app_config, use_app_context},
        utils::{self, grants_access},
        window::use_window_metrics,
    },
};

fn affordance_class(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::Save => "btn btn-sm btn-primary",
        Affordance::Publish => "btn btn-sm btn-secondary",
        Affordance::Cancel => "btn btn-sm btn-ghost text-error",
        Affordance::Edit | Affordance::Insert => "btn btn-sm btn-ghost",
    }
}

#[component]
pub fn NavBar() -> Element {
    let app = use_app_context();
    let config = use_app_config();
    let session = use_session();
    let metrics = use_window_metrics();
    let mut menu = use_signal(MenuState::default);

    let page = app.page();
    let data = app.data();
    let authenticated = grants_access(config.sso.enabled, session.is_authenticated());
    let affordances = affordances_for(authenticated, &page.read(), &data.read());

    let window_width = metrics.read().width;
    let mobile = is_mobile(window_width);
    let width = toolbar_width(window_width);

    // Re-armed on every menu change; a timer armed for an older state is a no-op.
    let idle_timeout = config.menu_idle_timeout;
    let idle_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let armed = Rc::clone(&idle_task);
    use_effect(move || {
        let ticket = menu.read().idle_ticket();
        if let Some(task) = armed.take() {
            task.cancel();
        }
        if let Some(ticket) = ticket {
            let mut menu = menu;
            armed.set(Some(spawn(async move {
                if close_when_idle(utils::sleep(idle_timeout), ticket, |t| menu.write().expire(t)).await {
                    debug!("menus closed after idle timeout");
                }
            })));
        }
    });
    use_drop(move || {
        if let Some(task) = idle_task.take() {
            task.cancel();
        }
    });

    let activate = use_callback(move |affordance: Affordance| {
        let handlers = EditHandlers::capture(&page.peek(), &data.peek());
        debug!(?affordance, "navbar action");
        let mut next = *menu.peek();
        let patch = affordance.invoke(&handlers, &mut next);
        menu.set(next);
        if let Some(patch) = patch {
            app.update_page(patch);
        }
    });

    let left_open = menu.read().is_open(MenuAnchor::Left);
    let right_open = menu.read().is_open(MenuAnchor::Right);

    rsx! {
        div {
            class: "navbar bg-base-200 shadow-sm mx-auto",
            style: "width: {width}px;",
            div { class: "navbar-start",
                if mobile {
                    div { class: if left_open { "dropdown dropdown-open" } else { "dropdown" },
                        button {
                            class: "btn btn-ghost btn-sm",
                            aria_label: "open navigation menu",
                            onclick: move |_| menu.write().toggle(MenuAnchor::Left),
                            "☰"
                        }
                        if left_open {
                            ul {
                                class: "menu menu-sm dropdown-content bg-base-200 rounded-box z-[50] mt-3 w-52 p-2 shadow",
                                onmouseenter: move |_| menu.write().touch(),
                                li {
                                    onclick: move |_| menu.write().close_all(),
                                    Link { to: Routes::DashboardPage {}, "Dashboard" }
                                }
                            }
                        }
                    }
                }
                Link { class: "btn btn-ghost text-xl", to: Routes::DashboardPage {}, "Dashboard" }
                if !mobile {
                    ul { class: "menu menu-horizontal px-1",
                        li { Link { to: Routes::DashboardPage {}, "Home" } }
                    }
                }
            }

            div { class: "navbar-end gap-2",
                if mobile {
                    if !affordances.is_empty() {
                        div { class: if right_open { "dropdown dropdown-end dropdown-open" } else { "dropdown dropdown-end" },
                            button {
                                class: "btn btn-ghost btn-sm",
                                aria_label: "open page actions",
                                onclick: move |_| menu.write().toggle(MenuAnchor::Right),
                                "⋮"
                            }
                            if right_open {
                                ul {
                                    class: "menu menu-sm dropdown-content bg-base-200 rounded-box z-[50] mt-3 w-40 p-2 shadow",
                                    onmouseenter: move |_| menu.write().touch(),
                                    for affordance in affordances.iter().copied() {
                                        li { key: "{affordance.label()}",
                                            button { onclick: move |_| activate.call(affordance), "{affordance.label()}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    for affordance in affordances.iter().copied() {
                        button {
                            key: "{affordance.label()}",
                            class: affordance_class(affordance),
                            onclick: move |_| activate.call(affordance),
                            "{affordance.label()}"
                        }
                    }
                }
            }
        }
    }
}
