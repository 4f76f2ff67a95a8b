use std::rc::Rc;

use dioxus::prelude::*;
use ds_types::session::SessionSnapshot;
use tracing::debug;

use super::adapter::{BrowserSession, SessionAdapter};
use crate::app::config::SsoConfig;

/// Session adapter plus the snapshot it last published.
#[derive(Clone)]
pub struct SessionContext {
    snapshot: Signal<SessionSnapshot>,
    adapter: Rc<BrowserSession>,
}

impl SessionContext {
    pub fn snapshot(&self) -> Signal<SessionSnapshot> {
        self.snapshot
    }

    pub fn adapter(&self) -> Rc<BrowserSession> {
        Rc::clone(&self.adapter)
    }

    /// Subscribes the caller to session changes.
    pub fn is_authenticated(&self) -> bool {
        self.snapshot.read().is_authenticated
    }
}

/// Create the session adapter and start restoring the session.
///
/// The adapter's initial snapshot is published first; the restored one
/// replaces it after mount, and only if it differs.
pub fn use_session_provider(sso: &SsoConfig) -> SessionContext {
    let adapter = use_hook(|| Rc::new(BrowserSession::from_config(sso)));
    let mut snapshot = use_signal(|| adapter.initial_snapshot());

    let restorer = Rc::clone(&adapter);
    use_hook(move || {
        spawn(async move {
            let restored = restorer.restore().await;
            debug!(authenticated = restored.is_authenticated, "session restored");
            if *snapshot.peek() != restored {
                snapshot.set(restored);
            }
        });
    });

    use_context_provider(|| SessionContext { snapshot, adapter })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
