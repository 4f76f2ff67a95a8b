use dioxus::prelude::*;

use crate::app::context::use_app_context;

/// Shows `page.error_message` until something clears it.
#[component]
pub fn ErrorBanner() -> Element {
    let page = use_app_context().page();
    let banner = page.read().error_message.clone();

    match banner {
        Some(banner) => rsx! {
            div { role: "alert", class: "alert alert-error mb-4",
                div { class: "flex flex-col",
                    span { class: "font-bold", "{banner.title}" }
                    span { class: "text-sm", "{banner.message}" }
                }
            }
        },
        None => rsx! {},
    }
}
