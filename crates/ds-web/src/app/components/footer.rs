use dioxus::prelude::*;

use crate::app::logging::{get_log_level, parse_level, set_log_level};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[component]
pub fn Footer() -> Element {
    let mut level = use_signal(|| get_log_level().to_string().to_ascii_lowercase());

    rsx! {
        footer { class: "footer footer-center text-base-content p-4",
            aside {
                p { "Template application please replace with your own" }
            }
            label { class: "flex items-center gap-2 text-xs opacity-70",
                "Console log level"
                select {
                    class: "select select-xs select-ghost",
                    value: "{level}",
                    onchange: move |evt| {
                        let selected = parse_level(Some(&evt.value()));
                        set_log_level(selected);
                        level.set(selected.to_string().to_ascii_lowercase());
                    },
                    for name in LEVELS {
                        option { key: "{name}", value: name, selected: level() == name, "{name}" }
                    }
                }
            }
        }
    }
}
