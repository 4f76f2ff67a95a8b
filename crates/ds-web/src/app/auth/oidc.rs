//! Browser side of the OpenID Connect sign-in.
//!
//! The provider is located through its discovery document and asked for an
//! id token and access token in the redirect fragment. On the way back the
//! `state` must answer the redirect this tab started and the id token must
//! pass the claims verifier: signature against the provider's keys, issuer,
//! audience, expiry and the nonce sent with the request. The tokens are then
//! kept in localStorage under the same key layout the common JS OIDC clients
//! use, so an existing session survives a reload.

use std::collections::HashMap;

use ds_types::session::{SessionSnapshot, SessionUser};
use openidconnect::{
    AuthenticationFlow, ClientId, CsrfToken, EndpointMaybeSet, EndpointNotSet, EndpointSet, IssuerUrl, Nonce, RedirectUrl, Scope,
    core::{CoreClient, CoreIdToken, CoreIdTokenVerifier, CoreProviderMetadata, CoreResponseType},
};
use openidconnect::url::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    app::{
        config::SsoConfig,
        storage::{BrowserStorage, StorageType},
        utils,
    },
    error::AppError,
};

/// Requested on top of `openid`, which is always sent.
pub const EXTRA_SCOPES: [&str; 2] = ["profile", "email"];
const PENDING_KEY: &str = "ds.oidc.pending";
const UNMATCHED_RESPONSE: &str = "sign-in response does not match a pending request";

/// Client as built from discovered provider metadata.
pub type OidcClient = CoreClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointMaybeSet, EndpointMaybeSet>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OidcSettings {
    pub authority: String,
    pub client_id: String,
    pub redirect_uri: String,
}

impl OidcSettings {
    /// `None` unless SSO is enabled.
    pub fn from_config(sso: &SsoConfig, redirect_uri: impl Into<String>) -> Option<Self> {
        if !sso.enabled {
            return None;
        }
        Some(Self {
            authority: sso.authority_url.clone()?,
            client_id: sso.client_id.clone()?,
            redirect_uri: redirect_uri.into(),
        })
    }

    pub fn user_store_key(&self) -> String {
        format!("oidc.user:{}:{}", self.authority, self.client_id)
    }

    pub fn issuer_url(&self) -> Result<IssuerUrl, AppError> {
        IssuerUrl::new(self.authority.clone()).map_err(AppError::signin)
    }

    /// Public client for the provider described by `metadata`.
    pub fn client(&self, metadata: CoreProviderMetadata) -> Result<OidcClient, AppError> {
        let redirect_uri = RedirectUrl::new(self.redirect_uri.clone()).map_err(AppError::signin)?;
        Ok(CoreClient::from_provider_metadata(metadata, ClientId::new(self.client_id.clone()), None).set_redirect_uri(redirect_uri))
    }
}

/// Correlation values for a redirect in flight, kept in sessionStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSignin {
    pub state: String,
    pub nonce: String,
}

impl PendingSignin {
    pub fn new(state: &CsrfToken, nonce: &Nonce) -> Self {
        Self {
            state: state.secret().clone(),
            nonce: nonce.secret().clone(),
        }
    }

    pub fn nonce(&self) -> Nonce {
        Nonce::new(self.nonce.clone())
    }
}

/// Implicit-flow authorization request (`response_type=id_token token`) with a
/// fresh state and nonce.
pub fn authorization_request(client: &OidcClient) -> (Url, PendingSignin) {
    let (url, state, nonce) = EXTRA_SCOPES
        .iter()
        .fold(
            client.authorize_url(AuthenticationFlow::<CoreResponseType>::Implicit(true), CsrfToken::new_random, Nonce::new_random),
            |request, scope| request.add_scope(Scope::new(scope.to_string())),
        )
        .url();
    (url, PendingSignin::new(&state, &nonce))
}

/// Token record persisted between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    /// Unix seconds.
    pub expires_at: Option<i64>,
}

impl StoredUser {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            access_token: self.access_token.clone(),
            id_token: self.id_token.clone(),
            expires_at: self.expires_at,
        }
    }
}

/// Parameters the provider put in the redirect fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callback {
    Tokens {
        access_token: Option<String>,
        id_token: Option<String>,
        token_type: Option<String>,
        scope: Option<String>,
        expires_in: Option<i64>,
        state: Option<String>,
    },
    Failure {
        error: String,
        description: Option<String>,
        state: Option<String>,
    },
}

impl Callback {
    pub fn state(&self) -> Option<&str> {
        match self {
            Callback::Tokens { state, .. } | Callback::Failure { state, .. } => state.as_deref(),
        }
    }
}

/// `None` when the fragment is not a sign-in response.
pub fn parse_callback(fragment: &str) -> Option<Callback> {
    let mut url = Url::parse("http://callback.invalid/").ok()?;
    url.set_query(Some(fragment));
    let mut params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    let state = params.remove("state");

    if let Some(error) = params.remove("error") {
        return Some(Callback::Failure {
            error,
            description: params.remove("error_description"),
            state,
        });
    }

    let access_token = params.remove("access_token");
    let id_token = params.remove("id_token");
    if access_token.is_none() && id_token.is_none() {
        return None;
    }

    Some(Callback::Tokens {
        access_token,
        id_token,
        token_type: params.remove("token_type"),
        scope: params.remove("scope"),
        expires_in: params.get("expires_in").and_then(|v| v.parse().ok()),
        state,
    })
}

/// The pending redirect `callback` answers. Successful and failed responses
/// alike are rejected when this tab has no redirect with the same `state`.
pub fn match_pending<'p>(callback: &Callback, pending: Option<&'p PendingSignin>) -> Result<&'p PendingSignin, AppError> {
    match (callback.state(), pending) {
        (Some(state), Some(pending)) if state == pending.state => Ok(pending),
        _ => Err(AppError::session(UNMATCHED_RESPONSE)),
    }
}

fn provider_error(error: String, description: Option<String>) -> AppError {
    AppError::session(description.unwrap_or(error))
}

/// Turn a sign-in response into a token record.
///
/// The id token is checked by `verifier` against the nonce of the matching
/// pending redirect; a response without one is rejected.
pub fn complete_callback(
    callback: Callback,
    pending: Option<&PendingSignin>,
    verifier: &CoreIdTokenVerifier<'_>,
    now: i64,
) -> Result<StoredUser, AppError> {
    let pending = match_pending(&callback, pending)?;

    match callback {
        Callback::Failure { error, description, .. } => Err(provider_error(error, description)),
        Callback::Tokens {
            access_token,
            id_token,
            token_type,
            scope,
            expires_in,
            ..
        } => {
            let raw = id_token.ok_or_else(|| AppError::session("sign-in response carries no id token"))?;
            let parsed: CoreIdToken = raw.parse().map_err(|e| AppError::session(format!("invalid id token: {e}")))?;
            let claims = parsed
                .claims(verifier, &pending.nonce())
                .map_err(|e| AppError::session(format!("id token rejected: {e}")))?;

            Ok(StoredUser {
                access_token,
                id_token: Some(raw),
                token_type,
                scope,
                expires_at: Some(expires_in.map_or_else(|| claims.expiration().timestamp(), |secs| now + secs)),
            })
        }
    }
}

#[derive(Debug)]
pub struct OidcSession {
    settings: OidcSettings,
    http: reqwest::Client,
    users: BrowserStorage,
    pending: BrowserStorage,
}

impl OidcSession {
    pub fn new(settings: OidcSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
            users: BrowserStorage::new(StorageType::Local),
            pending: BrowserStorage::new(StorageType::Session),
        }
    }

    pub fn settings(&self) -> &OidcSettings {
        &self.settings
    }

    /// Discover the provider (metadata and signing keys) and build the client.
    async fn discover(&self) -> Result<OidcClient, AppError> {
        let metadata = CoreProviderMetadata::discover_async(self.settings.issuer_url()?, &self.http)
            .await
            .map_err(|e| AppError::signin(format!("OIDC discovery failed: {e}")))?;
        self.settings.client(metadata)
    }

    /// Session state for a page loaded with `fragment`, at `now` (unix seconds).
    pub async fn restore_from(&self, fragment: Option<&str>, now: i64) -> SessionSnapshot {
        let key = self.settings.user_store_key();

        if let Some(callback) = fragment.and_then(parse_callback) {
            let pending = self.pending.get_json::<PendingSignin>(PENDING_KEY);
            if let Err(e) = self.pending.remove(PENDING_KEY) {
                warn!(error = %e, "failed to discard pending sign-in");
            }
            utils::strip_fragment();

            // Unmatched and failed responses are settled without a round trip.
            let outcome = match (match_pending(&callback, pending.as_ref()), callback) {
                (Err(err), _) => Err(err),
                (Ok(_), Callback::Failure { error, description, .. }) => Err(provider_error(error, description)),
                (Ok(_), tokens) => match self.discover().await {
                    Ok(client) => complete_callback(tokens, pending.as_ref(), &client.id_token_verifier(), now),
                    Err(err) => Err(err),
                },
            };

            return match outcome {
                Ok(user) => {
                    if let Err(e) = self.users.set_json(&key, &user) {
                        warn!(error = %e, "failed to persist session tokens");
                    }
                    info!(authority = %self.settings.authority, "sign-in completed");
                    SessionSnapshot::authenticated(user.session_user())
                }
                Err(err) => {
                    warn!(error = %err, "sign-in response rejected");
                    SessionSnapshot::failed(err.to_string())
                }
            };
        }

        match self.users.get_json::<StoredUser>(&key) {
            Some(user) if !user.is_expired(now) => SessionSnapshot::authenticated(user.session_user()),
            Some(_) => {
                debug!("stored session expired");
                if let Err(e) = self.users.remove(&key) {
                    warn!(error = %e, "failed to drop expired session");
                }
                SessionSnapshot::signed_out()
            }
            None => SessionSnapshot::signed_out(),
        }
    }

    pub async fn signin_redirect(&self) -> Result<(), AppError> {
        let client = self.discover().await?;
        let (url, pending) = authorization_request(&client);
        self.pending.set_json(PENDING_KEY, &pending)?;

        info!(authority = %self.settings.authority, "redirecting to identity provider");
        utils::navigate_to(url.as_str())
    }
}

#[cfg(test)]
#[path = "oidc_tests.rs"]
mod tests;
