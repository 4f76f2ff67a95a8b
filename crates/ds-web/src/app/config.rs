//! Build-time configuration.
//!
//! The SSO settings are baked in when the WASM bundle is compiled
//! (`SSO_AUTHORITY_URL`, `SSO_CLIENT_ID`, optionally `SSO_ENABLED=false` to
//! force it off) and never read at runtime.

use std::time::Duration;

use ds_types::menu::MENU_IDLE_TIMEOUT;
use reqwest::Url;

/// Path of the backend action endpoint, relative to the page origin.
pub const DEFAULT_API_PATH: &str = "/api";

/// Single-sign-on settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SsoConfig {
    /// True only when both an authority host and a client id are known.
    pub enabled: bool,
    pub authority_url: Option<String>,
    pub client_id: Option<String>,
    /// `host[:port]` of the authority URL.
    pub host: Option<String>,
}

impl SsoConfig {
    pub fn from_build_env() -> Self {
        Self::from_parts(option_env!("SSO_AUTHORITY_URL"), option_env!("SSO_CLIENT_ID"), option_env!("SSO_ENABLED"))
    }

    pub fn from_parts(authority_url: Option<&str>, client_id: Option<&str>, enabled_override: Option<&str>) -> Self {
        let authority_url = non_empty(authority_url);
        let client_id = non_empty(client_id);
        let host = authority_url.as_deref().and_then(authority_host);
        let forced_off = non_empty(enabled_override).is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"));

        Self {
            enabled: host.is_some() && client_id.is_some() && !forced_off,
            authority_url,
            client_id,
            host,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

fn authority_host(authority_url: &str) -> Option<String> {
    let url = Url::parse(authority_url).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Top-level configuration handed to every component through the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub sso: SsoConfig,
    pub api_path: String,
    pub menu_idle_timeout: Duration,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self {
            sso: SsoConfig::from_build_env(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sso: SsoConfig::default(),
            api_path: DEFAULT_API_PATH.to_string(),
            menu_idle_timeout: MENU_IDLE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_needs_host_and_client() {
        let sso = SsoConfig::from_parts(Some("https://id.example.com/realms/main"), Some("dashboard"), None);
        assert!(sso.enabled);
        assert_eq!(sso.host.as_deref(), Some("id.example.com"));

        assert!(!SsoConfig::from_parts(Some("https://id.example.com"), None, None).enabled);
        assert!(!SsoConfig::from_parts(None, Some("dashboard"), None).enabled);
        assert!(!SsoConfig::from_parts(Some("not a url"), Some("dashboard"), None).enabled);
        assert!(!SsoConfig::from_parts(Some("  "), Some("dashboard"), None).enabled);
    }

    #[test]
    fn test_host_keeps_explicit_port() {
        let sso = SsoConfig::from_parts(Some("http://localhost:8081/auth"), Some("c"), None);
        assert_eq!(sso.host.as_deref(), Some("localhost:8081"));
    }

    #[test]
    fn test_explicit_override_turns_sso_off() {
        let sso = SsoConfig::from_parts(Some("https://id.example.com"), Some("dashboard"), Some("false"));
        assert!(!sso.enabled);
        assert!(SsoConfig::from_parts(Some("https://id.example.com"), Some("dashboard"), Some("true")).enabled);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.sso.enabled);
        assert_eq!(config.api_path, "/api");
        assert_eq!(config.menu_idle_timeout, Duration::from_secs(5));
    }
}
