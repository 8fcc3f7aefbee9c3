//! Error types for the transport layer.
//!
//! A 404 is not an error here; it surfaces as [`super::ApiResponse::NotFound`].

use reqwest::StatusCode;
use thiserror::Error;

/// Maximum number of body characters kept in a [`TransportError::Status`].
pub const MAX_ERROR_BODY_CHARS: usize = 2000;

/// Errors that can occur while issuing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level error (DNS resolution, connection refused, TLS, body read).
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response other than 404, including 429 rate limiting.
    #[error("HTTP {status} from {url}")]
    Status {
        /// The URL that returned the error status.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Response body text (truncated).
        body: String,
        /// The Retry-After header value, if present (for 429 responses).
        retry_after: Option<String>,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client construction failed: {source}")]
    ClientBuild {
        /// The builder error.
        #[source]
        source: reqwest::Error,
    },

    /// The base URL or a joined request URL is malformed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A header value (API key or user agent) contains characters HTTP forbids.
    #[error("invalid value for header '{name}'")]
    InvalidHeader {
        /// Header name; the value is never included.
        name: &'static str,
    },
}

impl TransportError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a status error, truncating the body to [`MAX_ERROR_BODY_CHARS`].
    pub fn status(
        url: impl Into<String>,
        status: u16,
        body: &str,
        retry_after: Option<String>,
    ) -> Self {
        Self::Status {
            url: url.into(),
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            retry_after,
        }
    }

    /// Returns the HTTP status code for status errors.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true when the service answered 429 Too Many Requests.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }

    /// Single-line description suited to per-address report lines.
    ///
    /// Status errors render as `HTTP <code> <reason phrase>`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Status { status, .. } => {
                let reason = StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("Unknown Status");
                format!("HTTP {status} {reason}")
            }
            Self::Network { source, .. } if source.is_timeout() => "request timed out".to_string(),
            Self::Network { .. } => "network error".to_string(),
            other => other.to_string(),
        }
    }
}
