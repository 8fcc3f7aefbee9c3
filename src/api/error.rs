//! Error types for domain client operations.
//!
//! Transport failures, malformed responses and rejected arguments are kept
//! apart so callers can tell "the service said no" from "the service said
//! something we cannot read".

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by [`super::HibpClient`] accessors.
#[derive(Debug, Error)]
pub enum HibpError {
    /// The request failed or the service answered with a non-2xx, non-404 status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not match the expected model.
    #[error("invalid response from {endpoint}: {source}")]
    Validation {
        /// Endpoint path template, e.g. `/breach/{name}`.
        endpoint: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The body was not in the format the endpoint returns (JSON vs plain text).
    #[error("invalid response from {endpoint}: expected {expected}, got {found}")]
    UnexpectedFormat {
        /// Endpoint path template.
        endpoint: &'static str,
        /// What the endpoint should have returned.
        expected: &'static str,
        /// What arrived instead.
        found: &'static str,
    },

    /// A singular endpoint that always exists answered 404.
    #[error("{endpoint} returned 404 Not Found")]
    MissingResource {
        /// Endpoint path template.
        endpoint: &'static str,
    },

    /// An argument was rejected before any request was sent.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the rejected argument.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl HibpError {
    /// Creates an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for transport-level failures (network or HTTP status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true for responses that did not match the expected shape.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::UnexpectedFormat { .. })
    }

    /// Returns true when the service answered 429 Too Many Requests.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_rate_limited())
    }

    /// Single-line description for report output.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Transport(e) => e.summary(),
            other => other.to_string().replace(['\n', '\r'], " "),
        }
    }
}
