//! Backend version descriptor and the `/api` reply envelope.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Build information reported by the backend.
///
/// The shell displays it as-is; missing fields decode as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub build_time: String,
    #[serde(default)]
    pub go_version: String,
}

/// Actions understood by the backend's `/api?data=...` endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ApiAction {
    GetVersion,
}

impl ApiAction {
    /// JSON document carried in the `data` query parameter.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Why an `/api` reply could not be turned into a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The backend answered with an `{"error": ...}` body.
    #[error("{0}")]
    Backend(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Decode an `/api` reply body.
///
/// An `error` member always wins when it is set, whatever the HTTP status was
/// and whatever else the body carries. Unset means missing, `null`, `false`,
/// `0` or `""`; any other value is a failure. Strings are reported as-is,
/// anything else as its JSON text.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, ReplyError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ReplyError::Decode(e.to_string()))?;

    match value.get("error") {
        Some(error) if is_set(error) => {
            let message = match error {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            return Err(ReplyError::Backend(message));
        }
        _ => {}
    }

    serde_json::from_value(value).map_err(|e| ReplyError::Decode(e.to_string()))
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
