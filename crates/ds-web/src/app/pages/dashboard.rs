use dioxus::prelude::*;

use crate::app::{components::Layout, context::use_app_context};

#[component]
pub fn DashboardPage() -> Element {
    let data = use_app_context().data();
    let version = data.read().version.clone().unwrap_or_default();

    rsx! {
        document::Title { "Dashboard" }
        Layout {
            div { class: "flex flex-col gap-4",
                h1 { class: "text-3xl font-bold", "Dashboard" }
                div { role: "alert", class: "alert alert-info",
                    div { class: "flex flex-col gap-2",
                        p {
                            "This is a template dashboard. Replace this view with the pages of your application; "
                            "the navigation bar, the error banner and the sign-in handling come with the shell."
                        }
                        dl { class: "grid grid-cols-[auto_1fr] gap-x-4 text-sm",
                            dt { class: "font-semibold", "Version" }
                            dd { "{version.version}" }
                            dt { class: "font-semibold", "Build Date" }
                            dd { "{version.build_time}" }
                            dt { class: "font-semibold", "Go Version" }
                            dd { "{version.go_version}" }
                        }
                    }
                }
            }
        }
    }
}
