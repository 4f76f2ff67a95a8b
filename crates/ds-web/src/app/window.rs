//! Window size and scroll position, shared by the navbar and the back-to-top
//! button.

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

/// Id of the element whose width the back-to-top button is placed against.
pub const CONTAINER_ID: &str = "ds-container";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WindowMetrics {
    pub width: f64,
    pub container_width: f64,
    pub scroll_y: f64,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: 1280.0,
            container_width: 1200.0,
            scroll_y: 0.0,
        }
    }
}

/// Resize and scroll events are coalesced to one report per animation frame.
const LISTENER: &str = r#"
const report = () => {
    const container = document.getElementById("ds-container") || document.body;
    dioxus.send({
        width: window.innerWidth,
        container_width: container.clientWidth,
        scroll_y: window.scrollY,
    });
};
let queued = false;
const schedule = () => {
    if (queued) return;
    queued = true;
    requestAnimationFrame(() => {
        queued = false;
        report();
    });
};
window.addEventListener("resize", schedule);
window.addEventListener("scroll", schedule, { passive: true });
report();
"#;

/// Start listening for window changes and provide the metrics to the tree.
pub fn use_window_metrics_provider() -> Signal<WindowMetrics> {
    let mut metrics = use_signal(WindowMetrics::default);

    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(LISTENER);
            while let Ok(update) = eval.recv::<WindowMetrics>().await {
                if *metrics.peek() != update {
                    metrics.set(update);
                }
            }
            debug!("window metrics listener stopped");
        });
    });

    use_context_provider(|| metrics)
}

pub fn use_window_metrics() -> Signal<WindowMetrics> {
    use_context::<Signal<WindowMetrics>>()
}
