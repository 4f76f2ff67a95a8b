use dioxus::prelude::*;

use crate::{
    app::{
        auth::use_session,
        components::back_to_top::BACK_TO_TOP_ANCHOR,
        context::use_app_config,
        utils::grants_access,
        window::CONTAINER_ID,
    },
    components::{BackToTop, ErrorBanner, Footer, NavBar},
};

/// Page frame. With SSO enabled and no session only the banner and the
/// footer are rendered.
#[component]
pub fn Layout(children: Element) -> Element {
    let config = use_app_config();
    let session = use_session();
    let show_body = grants_access(config.sso.enabled, session.is_authenticated());

    rsx! {
        div {
            class: "ds-layout min-h-screen flex flex-col",
            div { id: BACK_TO_TOP_ANCHOR }
            if show_body {
                header {
                    NavBar {}
                }
            }
            main {
                id: CONTAINER_ID,
                class: "ds-main container mx-auto flex-grow p-4",
                ErrorBanner {}
                if show_body {
                    {children}
                }
            }
            Footer {}
            if show_body {
                BackToTop {}
            }
        }
    }
}
