use ds_types::{
    VersionInfo,
    session::BearerTokens,
    version::{ApiAction, decode_reply},
};
use reqwest::{Url, header::AUTHORIZATION};
use tracing::debug;

use crate::error::AppError;

/// Header carrying the OIDC id token next to the bearer access token.
pub const ID_TOKEN_HEADER: &str = "X-ID-Token";

/// Where the bootstrap cycle gets the backend version from.
#[allow(async_fn_in_trait)]
pub trait VersionSource {
    /// Fetch the version descriptor, authenticating with `tokens` when given.
    async fn fetch_version(&self, tokens: Option<&BearerTokens>) -> Result<VersionInfo, AppError>;
}

impl<V: VersionSource> VersionSource for &V {
    async fn fetch_version(&self, tokens: Option<&BearerTokens>) -> Result<VersionInfo, AppError> {
        (**self).fetch_version(tokens).await
    }
}

/// `GET /api?data={"action":"get_version"}` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpVersionSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpVersionSource {
    pub fn new(origin: &str, api_path: &str) -> Result<Self, AppError> {
        let base = Url::parse(origin).map_err(AppError::transport)?;
        let endpoint = base.join(api_path).map_err(AppError::transport)?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Client for the origin the page was served from.
    pub fn for_page_origin(api_path: &str) -> Result<Self, AppError> {
        let origin = crate::app::utils::page_origin().ok_or_else(|| AppError::transport("page origin is not available"))?;
        Self::new(&origin, api_path)
    }

    pub fn request_url(&self, action: ApiAction) -> Result<Url, AppError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("data", &action.encode()?);
        Ok(url)
    }
}

impl VersionSource for HttpVersionSource {
    async fn fetch_version(&self, tokens: Option<&BearerTokens>) -> Result<VersionInfo, AppError> {
        let url = self.request_url(ApiAction::GetVersion)?;
        debug!(%url, authenticated = tokens.is_some(), "requesting backend version");

        let mut request = self.client.get(url);
        if let Some(tokens) = tokens {
            request = request
                .header(AUTHORIZATION, format!("Bearer {}", tokens.access_token))
                .header(ID_TOKEN_HEADER, tokens.id_token.as_str());
        }

        // The body decides success; error replies arrive with any status code.
        let body = request.send().await?.text().await?;
        Ok(decode_reply(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_carries_encoded_action() {
        let source = HttpVersionSource::new("https://dash.example.com", "/api").unwrap();
        let url = source.request_url(ApiAction::GetVersion).unwrap();

        assert_eq!(url.path(), "/api");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("data".to_string(), r#"{"action":"get_version"}"#.to_string())]);
    }

    #[test]
    fn test_api_path_is_rooted_at_origin() {
        let source = HttpVersionSource::new("http://localhost:8080", "/api").unwrap();
        assert_eq!(source.endpoint.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn test_bad_origin_is_a_transport_error() {
        assert!(matches!(HttpVersionSource::new("nowhere", "/api"), Err(AppError::Transport { .. })));
    }
}
