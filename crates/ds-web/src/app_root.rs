use dioxus::prelude::*;

use crate::app::{
    auth::use_session_provider, bootstrap::use_bootstrap, config::AppConfig, context::use_app_context_provider, routes::AppRouter,
    window::use_window_metrics_provider,
};

/// Root shell: creates the store, the session and the bootstrap cycle, then
/// hands over to the router.
#[component]
pub fn AppRoot() -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    let session = use_session_provider(&config.sso);
    let app = use_app_context_provider();
    use_window_metrics_provider();
    use_bootstrap(app, session, &config);

    rsx! {
        document::Stylesheet { href: "/assets/tailwind.css" }
        AppRouter {}
    }
}
