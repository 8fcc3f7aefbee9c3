//! Authenticated REST client shared by the breach and Pwned Passwords APIs.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::error::TransportError;
use super::response::{ApiResponse, ResponseDecoding};

/// Header carrying the HIBP API key.
pub const API_KEY_HEADER: &str = "hibp-api-key";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// A thin request dispatcher bound to one base URL.
///
/// Every request carries the configured user agent and, when present, the
/// API key. Successful bodies are classified according to the client's
/// [`ResponseDecoding`]; 404 becomes [`ApiResponse::NotFound`]; every other
/// non-2xx status becomes [`TransportError::Status`]. Nothing is retried.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    decoding: ResponseDecoding,
    authenticated: bool,
}

impl RestClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] when the base URL is not an
    /// absolute http(s) URL, [`TransportError::InvalidHeader`] when the API key
    /// or user agent cannot be sent as a header, and
    /// [`TransportError::ClientBuild`] when the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        user_agent: &str,
        decoding: ResponseDecoding,
    ) -> Result<Self, TransportError> {
        let base_url = validate_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                TransportError::InvalidHeader {
                    name: API_KEY_HEADER,
                }
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|_| TransportError::InvalidHeader { name: "user-agent" })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .user_agent(user_agent)
            .default_headers(headers)
            .gzip(true)
            .build()
            .map_err(|source| TransportError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url,
            decoding,
            authenticated: api_key.is_some(),
        })
    }

    /// The base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The decoding strategy applied to successful bodies.
    #[must_use]
    pub fn decoding(&self) -> ResponseDecoding {
        self.decoding
    }

    /// Issues a GET request.
    ///
    /// # Errors
    ///
    /// See [`RestClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, TransportError> {
        self.request(Method::GET, path, query).await
    }

    /// Issues a request to `base_url + path` with the given query parameters.
    ///
    /// `path` must start with `/` and have its dynamic segments already
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when the request or body read fails,
    /// [`TransportError::Status`] for non-2xx responses other than 404, and
    /// [`TransportError::InvalidUrl`] when the joined URL does not parse.
    #[tracing::instrument(skip(self, query), fields(base_url = %self.base_url))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, TransportError> {
        let url = self.build_url(path, query)?;
        debug!(%url, authenticated = self.authenticated, "Sending request");

        let response = self
            .client
            .request(method, url.clone())
            .send()
            .await
            .map_err(|e| TransportError::network(url.as_str(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "Resource not found");
            return Ok(ApiResponse::NotFound);
        }

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = response.text().await.unwrap_or_default();
            warn!(
                %url,
                status = status.as_u16(),
                retry_after = retry_after.as_deref(),
                "Request failed"
            );
            return Err(TransportError::status(
                url.as_str(),
                status.as_u16(),
                &body,
                retry_after,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(url.as_str(), e))?;
        debug!(%url, bytes = body.len(), "Received response");
        Ok(ApiResponse::from_body(body, self.decoding))
    }

    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, TransportError> {
        let raw = format!("{}{path}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("decoding", &self.decoding)
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

fn validate_base_url(raw: &str) -> Result<String, TransportError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| TransportError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(TransportError::InvalidUrl {
                url: raw.to_string(),
                reason: format!("scheme '{scheme}' is not supported"),
            });
        }
    }
    if parsed.host().is_none() {
        return Err(TransportError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL has no host".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
