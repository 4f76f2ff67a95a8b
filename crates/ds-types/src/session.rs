//! What the identity adapter reports about the current browser session.

use serde::{Deserialize, Serialize};

/// Navigation the identity adapter is currently performing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Navigator {
    SigninRedirect,
    SigninSilent,
    SigninPopup,
    SignoutRedirect,
    SignoutSilent,
    SignoutPopup,
}

/// Tokens held for the signed-in user; either may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub access_token: Option<String>,
    pub id_token: Option<String>,
    /// Unix seconds.
    pub expires_at: Option<i64>,
}

/// Both tokens, present and non-empty, ready to be sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerTokens {
    pub access_token: String,
    pub id_token: String,
}

impl SessionUser {
    pub fn bearer_tokens(&self) -> Option<BearerTokens> {
        let access_token = self.access_token.as_deref().filter(|t| !t.is_empty())?;
        let id_token = self.id_token.as_deref().filter(|t| !t.is_empty())?;
        Some(BearerTokens {
            access_token: access_token.to_string(),
            id_token: id_token.to_string(),
        })
    }
}

/// Point-in-time view of the identity adapter.
///
/// A change of snapshot is what re-runs the bootstrap cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub active_navigator: Option<Navigator>,
    pub error: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Read access to the session fields the bootstrap cycle consults.
pub trait SessionView {
    fn is_loading(&self) -> bool;
    fn is_authenticated(&self) -> bool;
    fn active_navigator(&self) -> Option<Navigator>;
    fn error_message(&self) -> Option<&str>;
    fn user(&self) -> Option<&SessionUser>;
}

impl SessionView for SessionSnapshot {
    fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    fn active_navigator(&self) -> Option<Navigator> {
        self.active_navigator
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}
