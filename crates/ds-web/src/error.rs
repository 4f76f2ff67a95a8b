//! Error types for ds-web.
//!
//! Every failure the shell can hit ends up in the same place: a banner in the
//! page slice. `AppError::banner` is that mapping.

use ds_types::{ErrorMessage, version::ReplyError};
use thiserror::Error;

/// Banner title shared by every failure of the bootstrap cycle.
pub const ERROR_BANNER_TITLE: &str = "Error while getting version";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The identity adapter reported a failure.
    #[error("{message}")]
    Session { message: String },

    /// Signed in, but the adapter holds no usable tokens.
    #[error("Access/ID Token is not available")]
    MissingTokens,

    /// The request never produced a readable body.
    #[error("{message}")]
    Transport { message: String },

    /// The backend answered with an `{"error": ...}` body.
    #[error("{message}")]
    Backend { message: String },

    #[error("invalid response: {message}")]
    Decode { message: String },

    /// The sign-in redirect could not be started.
    #[error("sign-in failed: {message}")]
    Signin { message: String },

    /// Browser storage was unavailable or rejected a write.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl AppError {
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session { message: message.into() }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport { message: err.to_string() }
    }

    pub fn signin(err: impl std::fmt::Display) -> Self {
        Self::Signin { message: err.to_string() }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage { message: err.to_string() }
    }

    pub fn banner(&self) -> ErrorMessage {
        ErrorMessage::new(ERROR_BANNER_TITLE, self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode { message: err.to_string() }
        } else {
            Self::transport(err)
        }
    }
}

impl From<ReplyError> for AppError {
    fn from(err: ReplyError) -> Self {
        match err {
            ReplyError::Backend(message) => Self::Backend { message },
            ReplyError::Decode(message) => Self::Decode { message },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown_verbatim() {
        let err = AppError::from(ReplyError::Backend("boom".to_string()));
        assert_eq!(err.banner(), ErrorMessage::new(ERROR_BANNER_TITLE, "boom"));
    }

    #[test]
    fn test_every_kind_shares_the_banner_title() {
        let errors = [
            AppError::session("provider unreachable"),
            AppError::MissingTokens,
            AppError::transport("connection refused"),
            AppError::from(ReplyError::Decode("eof".to_string())),
        ];
        for err in errors {
            assert_eq!(err.banner().title, ERROR_BANNER_TITLE);
        }
        assert_eq!(AppError::MissingTokens.banner().message, "Access/ID Token is not available");
    }
}
