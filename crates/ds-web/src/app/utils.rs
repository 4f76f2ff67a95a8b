use std::time::Duration;

use crate::error::AppError;

/// The back-to-top button fades in past this scroll offset (px).
pub const SCROLL_TRIGGER_THRESHOLD: f64 = 100.0;

/// Smallest gap between the back-to-top button and the right window edge (px).
pub const FAB_MIN_RIGHT: f64 = 40.0;

/// Right offset that keeps the back-to-top button just outside the content
/// column, or pinned near the window edge when the column fills the window.
pub fn fab_right_offset(window_width: f64, container_width: f64) -> f64 {
    let offset = (window_width + container_width) / 2.0 - container_width + FAB_MIN_RIGHT;
    offset.max(FAB_MIN_RIGHT)
}

/// Body content is shown without SSO, or once the session is authenticated.
pub fn grants_access(sso_enabled: bool, is_authenticated: bool) -> bool {
    !sso_enabled || is_authenticated
}

pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Origin of the page, e.g. `https://dash.example.com`.
pub fn page_origin() -> Option<String> {
    #[cfg(feature = "web")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Full URL of the page, used as the sign-in redirect target.
pub fn page_href() -> Option<String> {
    #[cfg(feature = "web")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Fragment of the page URL without the leading `#`, if any.
pub fn location_fragment() -> Option<String> {
    #[cfg(feature = "web")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let fragment = hash.strip_prefix('#').unwrap_or(&hash);
        (!fragment.is_empty()).then(|| fragment.to_string())
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Drop the fragment from the address bar without reloading.
pub fn strip_fragment() {
    #[cfg(feature = "web")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        if let Ok(history) = window.history() {
            if let Err(e) = history.replace_state_with_url(&web_sys::wasm_bindgen::JsValue::NULL, "", Some(&path)) {
                tracing::warn!(error = ?e, "failed to strip sign-in callback from the address bar");
            }
        }
    }
}

/// Leave the application for `url`.
pub fn navigate_to(url: &str) -> Result<(), AppError> {
    #[cfg(feature = "web")]
    {
        let window = web_sys::window().ok_or_else(|| AppError::signin("window not available"))?;
        window.location().set_href(url).map_err(|e| AppError::signin(format!("{e:?}")))
    }
    #[cfg(not(feature = "web"))]
    {
        Err(AppError::signin(format!("cannot navigate to {url} outside the browser")))
    }
}
