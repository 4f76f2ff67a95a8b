//! Session and version bootstrap.
//!
//! Every time the session snapshot changes one cycle runs: the session state
//! is mirrored into the page banner, a sign-in redirect is started when the
//! user is signed out, and once the session allows it the backend version is
//! fetched into the data slice.
//!
//! Cycles may overlap while a fetch is in flight. Each one is stamped from a
//! monotonic counter and a fetch completing after a newer cycle started is
//! dropped.

use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;
use ds_types::{
    DataPatch, ErrorMessage, PagePatch, StateSink,
    session::{BearerTokens, Navigator, SessionSnapshot, SessionView},
};
use futures::StreamExt;
use tracing::{debug, error, info, warn};

use crate::{
    app::{
        api::{HttpVersionSource, VersionSource},
        auth::{SessionAdapter, SessionContext},
        config::AppConfig,
        context::AppContext,
    },
    error::{AppError, ERROR_BANNER_TITLE},
};

const PLEASE_WAIT: &str = "Please wait...";

/// Where a cycle ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    SilentAuthenticating,
    Loading,
    Error,
    Unauthenticated,
    /// Reached by [`evaluate`] only; a cycle moves on to fetching.
    Authenticated,
    /// Reached by [`evaluate`] only; a cycle waits for the fetch to finish.
    Fetching,
    Ready,
    FetchError,
    /// A newer cycle started before this one's fetch completed.
    Superseded,
}

/// What a cycle does for a given session state.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Apply the updates and stop.
    Halt {
        phase: Phase,
        data: Option<DataPatch>,
        page: PagePatch,
        redirect: bool,
    },
    /// Apply `page`, then fetch the version.
    Fetch {
        page: PagePatch,
        tokens: Option<BearerTokens>,
    },
}

impl Step {
    pub fn phase(&self) -> Phase {
        match self {
            Step::Halt { phase, .. } => *phase,
            Step::Fetch { .. } => Phase::Fetching,
        }
    }
}

fn waiting(title: &str) -> PagePatch {
    PagePatch::new().banner(ErrorMessage::new(title, PLEASE_WAIT))
}

/// Decide the cycle's step without touching the store or the network.
///
/// With SSO disabled the session is never consulted.
pub fn evaluate<V: SessionView + ?Sized>(sso_enabled: bool, session: &V) -> Step {
    if !sso_enabled {
        return Step::Fetch {
            page: PagePatch::new().clear_banner(),
            tokens: None,
        };
    }

    if session.active_navigator() == Some(Navigator::SigninSilent) {
        return Step::Halt {
            phase: Phase::SilentAuthenticating,
            data: None,
            page: waiting("Authenticating"),
            redirect: false,
        };
    }

    if session.is_loading() {
        return Step::Halt {
            phase: Phase::Loading,
            data: None,
            page: waiting("Loading"),
            redirect: false,
        };
    }

    if let Some(message) = session.error_message() {
        return Step::Halt {
            phase: Phase::Error,
            data: Some(DataPatch::new().clear_version()),
            page: PagePatch::new().banner(ErrorMessage::new(ERROR_BANNER_TITLE, message)),
            redirect: false,
        };
    }

    if !session.is_authenticated() {
        return Step::Halt {
            phase: Phase::Unauthenticated,
            data: Some(DataPatch::new().clear_version()),
            page: waiting("Authenticating"),
            redirect: true,
        };
    }

    match session.user().and_then(|user| user.bearer_tokens()) {
        Some(tokens) => Step::Fetch {
            page: PagePatch::new().clear_banner(),
            tokens: Some(tokens),
        },
        None => Step::Halt {
            phase: Phase::FetchError,
            data: None,
            page: PagePatch::new().banner(AppError::MissingTokens.banner()),
            redirect: false,
        },
    }
}

/// Runs bootstrap cycles against a store, a session adapter and a version
/// source.
pub struct Bootstrap<S, A, V> {
    sink: S,
    adapter: A,
    source: V,
    sso_enabled: bool,
    cycle: Cell<u64>,
    /// Set while the latest cycle left the session in the unauthenticated
    /// state with a redirect already issued.
    redirected: Cell<bool>,
}

impl<S, A, V> Bootstrap<S, A, V>
where
    S: StateSink,
    A: SessionAdapter,
    V: VersionSource,
{
    pub fn new(sink: S, adapter: A, source: V, sso_enabled: bool) -> Self {
        Self {
            sink,
            adapter,
            source,
            sso_enabled,
            cycle: Cell::new(0),
            redirected: Cell::new(false),
        }
    }

    fn is_current(&self, cycle: u64) -> bool {
        self.cycle.get() == cycle
    }

    /// Run one cycle for `session` and report where it ended.
    pub async fn run_cycle<T: SessionView + ?Sized>(&self, session: &T) -> Phase {
        let cycle = self.cycle.get() + 1;
        self.cycle.set(cycle);

        let step = evaluate(self.sso_enabled, session);
        debug!(cycle, phase = ?step.phase(), "bootstrap cycle");

        match step {
            Step::Halt {
                phase,
                data,
                page,
                redirect,
            } => {
                if let Some(data) = data {
                    self.sink.update_data(data);
                }
                self.sink.update_page(page);

                if !redirect {
                    self.redirected.set(false);
                } else if !self.redirected.replace(true) {
                    info!(cycle, "starting sign-in redirect");
                    if let Err(err) = self.adapter.signin_redirect().await {
                        error!(cycle, error = %err, "sign-in redirect failed");
                        if self.is_current(cycle) {
                            self.sink.update_page(PagePatch::new().banner(err.banner()));
                        }
                    }
                }
                phase
            }
            Step::Fetch { page, tokens } => {
                self.redirected.set(false);
                self.sink.update_page(page);

                let result = self.source.fetch_version(tokens.as_ref()).await;
                if !self.is_current(cycle) {
                    warn!(cycle, latest = self.cycle.get(), "dropping version reply from a superseded cycle");
                    return Phase::Superseded;
                }

                match result {
                    Ok(version) => {
                        info!(cycle, version = %version.version, "backend version loaded");
                        self.sink.update_data(DataPatch::new().version(version));
                        self.sink.update_page(PagePatch::new().clear_banner());
                        Phase::Ready
                    }
                    Err(err) => {
                        error!(cycle, error = %err, "failed to load backend version");
                        self.sink.update_page(PagePatch::new().banner(err.banner()));
                        Phase::FetchError
                    }
                }
            }
        }
    }
}

/// Run a bootstrap cycle for every session snapshot the provider publishes.
pub fn use_bootstrap(app: AppContext, session: SessionContext, config: &AppConfig) {
    let sso_enabled = config.sso.enabled;
    let api_path = config.api_path.clone();
    let adapter = session.adapter();

    let coordinator = use_coroutine(move |mut snapshots: UnboundedReceiver<SessionSnapshot>| {
        let adapter = Rc::clone(&adapter);
        let api_path = api_path.clone();
        async move {
            let source = match HttpVersionSource::for_page_origin(&api_path) {
                Ok(source) => source,
                Err(err) => {
                    error!(error = %err, "version client unavailable");
                    app.update_page(PagePatch::new().banner(err.banner()));
                    return;
                }
            };
            let bootstrap = Rc::new(Bootstrap::new(app, adapter, source, sso_enabled));

            while let Some(snapshot) = snapshots.next().await {
                let bootstrap = Rc::clone(&bootstrap);
                spawn(async move {
                    bootstrap.run_cycle(&snapshot).await;
                });
            }
        }
    });

    let snapshot = session.snapshot();
    use_effect(move || {
        coordinator.send(snapshot());
    });
}
