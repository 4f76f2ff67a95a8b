use dioxus::prelude::*;
use tracing::warn;

use crate::app::{
    utils::{SCROLL_TRIGGER_THRESHOLD, fab_right_offset},
    window::use_window_metrics,
};

/// Element the back-to-top button scrolls into view.
pub const BACK_TO_TOP_ANCHOR: &str = "back-to-top-anchor";

/// Floating button that appears once the page is scrolled down.
#[component]
pub fn BackToTop() -> Element {
    let metrics = use_window_metrics();
    let current = *metrics.read();

    let visible = current.scroll_y > SCROLL_TRIGGER_THRESHOLD;
    let right = fab_right_offset(current.width, current.container_width);
    let visibility = if visible { "opacity-100 scale-100" } else { "opacity-0 scale-0 pointer-events-none" };

    rsx! {
        button {
            class: "btn btn-circle btn-primary btn-sm fixed bottom-4 shadow-lg transition-all {visibility}",
            style: "right: {right}px;",
            aria_label: "scroll back to top",
            onclick: move |_| {
                spawn(async move {
                    let script = format!(
                        r#"document.getElementById("{BACK_TO_TOP_ANCHOR}")?.scrollIntoView({{ behavior: "smooth", block: "center" }});"#
                    );
                    if let Err(e) = document::eval(&script).await {
                        warn!(error = ?e, "scroll to top failed");
                    }
                });
            },
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                class: "h-5 w-5",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M5 15l7-7 7 7"
                }
            }
        }
    }
}
