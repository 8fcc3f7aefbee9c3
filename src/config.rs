//! Runtime configuration from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file in the working directory. [`Config::from_lookup`] takes the
//! lookup as a function so tests never touch the real environment.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::api::{DEFAULT_API_URL, DEFAULT_PASSWORDS_URL, HibpClient, HibpError};
use crate::user_agent::default_user_agent;

/// Required: the HIBP API key.
pub const API_KEY_VAR: &str = "HIBP_API_KEY";
/// Optional: override for the breach API base URL.
pub const API_URL_VAR: &str = "HIBP_API_URL";
/// Optional: override for the Pwned Passwords base URL.
pub const PASSWORDS_URL_VAR: &str = "HIBP_PASSWORDS_URL";
/// Optional: override for the User-Agent header.
pub const USER_AGENT_VAR: &str = "HIBP_USER_AGENT";

/// Number of trailing key characters left visible by [`mask_secret`].
const VISIBLE_KEY_CHARS: usize = 8;

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The API key variable is unset or blank.
    #[error(
        "HIBP_API_KEY environment variable not set\n  Suggestion: export HIBP_API_KEY=<key> or add it to a .env file"
    )]
    MissingApiKey,

    /// A base URL override is not an absolute http(s) URL.
    #[error("{var} is not a valid http(s) URL: '{value}' ({reason})")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings needed to build a [`HibpClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub user_agent: String,
    pub api_url: String,
    pub passwords_url: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `HIBP_API_KEY` is unset or
    /// blank and [`ConfigError::InvalidUrl`] if a base URL override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if the API key is unset or blank
    /// and [`ConfigError::InvalidUrl`] if a base URL override is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let api_url = match get(API_URL_VAR) {
            Some(url) => check_url(API_URL_VAR, url)?,
            None => DEFAULT_API_URL.to_string(),
        };
        let passwords_url = match get(PASSWORDS_URL_VAR) {
            Some(url) => check_url(PASSWORDS_URL_VAR, url)?,
            None => DEFAULT_PASSWORDS_URL.to_string(),
        };
        Ok(Self {
            api_key,
            user_agent: get(USER_AGENT_VAR).unwrap_or_else(default_user_agent),
            api_url,
            passwords_url,
        })
    }

    /// The API key with all but the last eight characters masked.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        mask_secret(&self.api_key)
    }

    /// Builds the domain client described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::Transport`] if a URL or header value is invalid.
    pub fn build_client(&self) -> Result<HibpClient, HibpError> {
        HibpClient::with_base_urls(
            Some(&self.api_key),
            &self.user_agent,
            &self.api_url,
            &self.passwords_url,
        )
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.masked_api_key())
            .field("user_agent", &self.user_agent)
            .field("api_url", &self.api_url)
            .field("passwords_url", &self.passwords_url)
            .finish()
    }
}

fn check_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        var,
        value: value.clone(),
        reason,
    };
    let parsed = Url::parse(&value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    Ok(value)
}

/// Masks all but the last eight characters of `secret` with `*`.
///
/// Secrets of eight characters or fewer are masked entirely.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= VISIBLE_KEY_CHARS {
        return "*".repeat(len);
    }
    let visible: String = secret.chars().skip(len - VISIBLE_KEY_CHARS).collect();
    format!("{}{visible}", "*".repeat(len - VISIBLE_KEY_CHARS))
}

/// Loads `.env` from the working directory (or a parent) if one exists.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env");
            Some(path)
        }
        Err(e) => {
            debug!(error = %e, "No .env loaded");
            None
        }
    }
}
