use dioxus::prelude::*;

use crate::components::Layout;

/// Alert text for an unmatched route, segments joined as typed.
pub fn not_found_message(route: &[String]) -> String {
    format!("Page not found: {}", route.join("/"))
}

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let message = not_found_message(&route);
    rsx! {
        document::Title { "Page not found" }
        Layout {
            div { role: "alert", class: "alert alert-error",
                div { class: "flex flex-col",
                    span { class: "font-bold", "Error" }
                    span { class: "text-sm", "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Routes;

    #[test]
    fn test_message_keeps_route_without_extra_slash() {
        let Ok(Routes::NotFoundPage { route }) = Routes::from_str("/settings/users") else {
            panic!("expected the catch-all route");
        };
        assert_eq!(not_found_message(&route), "Page not found: settings/users");
    }
}
