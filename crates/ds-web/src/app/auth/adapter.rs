use std::rc::Rc;

use chrono::Utc;
use ds_types::session::SessionSnapshot;

use super::oidc::{OidcSession, OidcSettings};
use crate::{
    app::{config::SsoConfig, utils},
    error::AppError,
};

/// The identity client as seen by the rest of the shell.
#[allow(async_fn_in_trait)]
pub trait SessionAdapter {
    /// What to publish before [`SessionAdapter::restore`] has run.
    fn initial_snapshot(&self) -> SessionSnapshot;

    /// Work out the current session, finishing a sign-in callback if the page
    /// was loaded from one.
    async fn restore(&self) -> SessionSnapshot;

    /// Send the browser to the identity provider.
    async fn signin_redirect(&self) -> Result<(), AppError>;
}

impl<A: SessionAdapter> SessionAdapter for Rc<A> {
    fn initial_snapshot(&self) -> SessionSnapshot {
        (**self).initial_snapshot()
    }

    async fn restore(&self) -> SessionSnapshot {
        (**self).restore().await
    }

    async fn signin_redirect(&self) -> Result<(), AppError> {
        (**self).signin_redirect().await
    }
}

impl<A: SessionAdapter> SessionAdapter for &A {
    fn initial_snapshot(&self) -> SessionSnapshot {
        (**self).initial_snapshot()
    }

    async fn restore(&self) -> SessionSnapshot {
        (**self).restore().await
    }

    async fn signin_redirect(&self) -> Result<(), AppError> {
        (**self).signin_redirect().await
    }
}

/// Session adapter chosen from the build-time SSO settings.
#[derive(Debug)]
pub enum BrowserSession {
    /// No identity provider configured.
    Disabled,
    Oidc(OidcSession),
}

impl BrowserSession {
    pub fn from_config(sso: &SsoConfig) -> Self {
        let redirect_uri = utils::page_href().map(|href| href.split('#').next().unwrap_or_default().to_string());
        match redirect_uri.and_then(|uri| OidcSettings::from_config(sso, uri)) {
            Some(settings) => BrowserSession::Oidc(OidcSession::new(settings)),
            None => BrowserSession::Disabled,
        }
    }
}

impl SessionAdapter for BrowserSession {
    fn initial_snapshot(&self) -> SessionSnapshot {
        match self {
            BrowserSession::Disabled => SessionSnapshot::signed_out(),
            BrowserSession::Oidc(_) => SessionSnapshot::loading(),
        }
    }

    async fn restore(&self) -> SessionSnapshot {
        match self {
            BrowserSession::Disabled => SessionSnapshot::signed_out(),
            BrowserSession::Oidc(oidc) => {
                oidc.restore_from(utils::location_fragment().as_deref(), Utc::now().timestamp())
                    .await
            }
        }
    }

    async fn signin_redirect(&self) -> Result<(), AppError> {
        match self {
            BrowserSession::Disabled => Err(AppError::signin("single sign-on is not configured")),
            BrowserSession::Oidc(oidc) => oidc.signin_redirect().await,
        }
    }
}
