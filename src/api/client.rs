//! Typed accessors for every documented HIBP endpoint.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{
    AliasMap, Breach, BreachName, DataClass, Paste, SubscribedDomain, SubscriptionStatus,
    is_valid_hash_prefix,
};
use crate::transport::{ApiResponse, ResponseDecoding, RestClient};

use super::error::HibpError;
use super::query::{AccountQuery, BreachListQuery};

/// Default HIBP v3 API base URL.
pub const DEFAULT_API_URL: &str = "https://haveibeenpwned.com/api/v3";

/// Default Pwned Passwords API base URL.
pub const DEFAULT_PASSWORDS_URL: &str = "https://api.pwnedpasswords.com";

/// Client for the HIBP breach API and the Pwned Passwords range API.
///
/// Collection accessors return an empty collection when the service answers
/// 404; singular accessors return `None`. Transport and validation errors are
/// propagated unchanged. Nothing is retried: a 429 surfaces as a
/// [`HibpError::Transport`] and backing off is the caller's decision.
#[derive(Debug, Clone)]
pub struct HibpClient {
    api: RestClient,
    passwords: RestClient,
}

impl HibpClient {
    /// Creates a client against the public HIBP endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::Transport`] if the API key or user agent is not a
    /// valid header value or the HTTP client cannot be built.
    #[tracing::instrument(skip_all)]
    pub fn new(api_key: &str, user_agent: &str) -> Result<Self, HibpError> {
        Self::with_base_urls(
            Some(api_key),
            user_agent,
            DEFAULT_API_URL,
            DEFAULT_PASSWORDS_URL,
        )
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// Without an API key only the unauthenticated endpoints (`/breaches`,
    /// `/breach`, `/latestbreach`, `/dataclasses`, range search) succeed. The
    /// key is never sent to the Pwned Passwords API.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::Transport`] if a base URL is invalid, a header
    /// value is invalid, or the HTTP client cannot be built.
    #[tracing::instrument(skip(api_key))]
    pub fn with_base_urls(
        api_key: Option<&str>,
        user_agent: &str,
        api_url: &str,
        passwords_url: &str,
    ) -> Result<Self, HibpError> {
        let api = RestClient::new(api_url, api_key, user_agent, ResponseDecoding::Detect)?;
        let passwords =
            RestClient::new(passwords_url, None, user_agent, ResponseDecoding::PlainText)?;
        Ok(Self { api, passwords })
    }

    // ==================== Breaches ====================

    /// Full breach records for an account.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty account, otherwise
    /// transport or validation errors.
    pub async fn get_breaches_for_account(&self, account: &str) -> Result<Vec<Breach>, HibpError> {
        self.get_breaches_for_account_filtered(account, &AccountQuery::default())
            .await
    }

    /// Full breach records for an account, with domain/verification filters.
    ///
    /// # Errors
    ///
    /// See [`HibpClient::get_breaches_for_account`].
    #[tracing::instrument(skip(self))]
    pub async fn get_breaches_for_account_filtered(
        &self,
        account: &str,
        query: &AccountQuery,
    ) -> Result<Vec<Breach>, HibpError> {
        let account = require("account", account)?;
        let path = format!("/breachedaccount/{}", urlencoding::encode(account));
        self.fetch_collection("/breachedaccount/{account}", &path, &query.params(false))
            .await
    }

    /// Truncated breach records (names only) for an account.
    ///
    /// # Errors
    ///
    /// See [`HibpClient::get_breaches_for_account`].
    #[tracing::instrument(skip(self))]
    pub async fn get_breach_names_for_account(
        &self,
        account: &str,
        query: &AccountQuery,
    ) -> Result<Vec<BreachName>, HibpError> {
        let account = require("account", account)?;
        let path = format!("/breachedaccount/{}", urlencoding::encode(account));
        self.fetch_collection("/breachedaccount/{account}", &path, &query.params(true))
            .await
    }

    /// Breached aliases on a verified domain, mapped to breach names.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty domain, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_breached_domain(&self, domain: &str) -> Result<AliasMap, HibpError> {
        let domain = require("domain", domain)?;
        let path = format!("/breacheddomain/{}", urlencoding::encode(domain));
        self.fetch_collection("/breacheddomain/{domain}", &path, &[])
            .await
    }

    /// Domains verified for domain search under the API key.
    ///
    /// # Errors
    ///
    /// Returns transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_subscribed_domains(&self) -> Result<Vec<SubscribedDomain>, HibpError> {
        self.fetch_collection("/subscribeddomains", "/subscribeddomains", &[])
            .await
    }

    /// Every breach in the system, optionally restricted to one domain.
    ///
    /// # Errors
    ///
    /// Returns transport or validation errors.
    pub async fn get_all_breaches(&self, domain: Option<&str>) -> Result<Vec<Breach>, HibpError> {
        let query = BreachListQuery {
            domain: domain.map(str::to_string),
            is_spam_list: None,
        };
        self.get_all_breaches_filtered(&query).await
    }

    /// Every breach in the system matching `query`.
    ///
    /// # Errors
    ///
    /// Returns transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_breaches_filtered(
        &self,
        query: &BreachListQuery,
    ) -> Result<Vec<Breach>, HibpError> {
        self.fetch_collection("/breaches", "/breaches", &query.params())
            .await
    }

    /// A single breach by its unique name; `None` when no such breach exists.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty name, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_single_breach(&self, name: &str) -> Result<Option<Breach>, HibpError> {
        let name = require("name", name)?;
        let path = format!("/breach/{}", urlencoding::encode(name));
        self.fetch_optional("/breach/{name}", &path).await
    }

    /// The most recently added breach.
    ///
    /// # Errors
    ///
    /// Returns transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_latest_breach(&self) -> Result<Option<Breach>, HibpError> {
        self.fetch_optional("/latestbreach", "/latestbreach").await
    }

    /// Every data class label known to the system.
    ///
    /// # Errors
    ///
    /// Returns transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_data_classes(&self) -> Result<Vec<DataClass>, HibpError> {
        self.fetch_collection("/dataclasses", "/dataclasses", &[])
            .await
    }

    // ==================== Stealer logs ====================
    // These need a Pwned 5 (or higher) subscription; lower tiers get a 401/403
    // which surfaces as a transport error.

    /// Website domains captured alongside `email` in stealer logs.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty address, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_stealer_logs_by_email(&self, email: &str) -> Result<Vec<String>, HibpError> {
        let email = require("email", email)?;
        let path = format!("/stealerlogsbyemail/{}", urlencoding::encode(email));
        self.fetch_collection("/stealerlogsbyemail/{email}", &path, &[])
            .await
    }

    /// Email addresses captured against a website domain in stealer logs.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty domain, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_stealer_logs_by_website_domain(
        &self,
        domain: &str,
    ) -> Result<Vec<String>, HibpError> {
        let domain = require("domain", domain)?;
        let path = format!("/stealerlogsbywebsitedomain/{}", urlencoding::encode(domain));
        self.fetch_collection("/stealerlogsbywebsitedomain/{domain}", &path, &[])
            .await
    }

    /// Aliases on an email domain mapped to the website domains they were captured on.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty domain, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_stealer_logs_by_email_domain(
        &self,
        domain: &str,
    ) -> Result<AliasMap, HibpError> {
        let domain = require("domain", domain)?;
        let path = format!("/stealerlogsbyemaildomain/{}", urlencoding::encode(domain));
        self.fetch_collection("/stealerlogsbyemaildomain/{domain}", &path, &[])
            .await
    }

    // ==================== Pastes ====================

    /// Pastes containing the account.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] for an empty account, otherwise
    /// transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_pastes_for_account(&self, account: &str) -> Result<Vec<Paste>, HibpError> {
        let account = require("account", account)?;
        let path = format!("/pasteaccount/{}", urlencoding::encode(account));
        self.fetch_collection("/pasteaccount/{account}", &path, &[])
            .await
    }

    // ==================== Subscription ====================

    /// Status of the subscription tied to the API key.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::MissingResource`] if the service answers 404,
    /// otherwise transport or validation errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_subscription_status(&self) -> Result<SubscriptionStatus, HibpError> {
        const ENDPOINT: &str = "/subscription/status";
        self.fetch_optional(ENDPOINT, ENDPOINT)
            .await?
            .ok_or(HibpError::MissingResource { endpoint: ENDPOINT })
    }

    // ==================== Pwned Passwords ====================

    /// Raw `SUFFIX:COUNT` lines for every SHA-1 hash starting with `hash_prefix`.
    ///
    /// The body is split into lines verbatim; no JSON decoding is attempted.
    /// Use [`crate::models::parse_range_lines`] to parse them.
    ///
    /// # Errors
    ///
    /// Returns [`HibpError::InvalidInput`] unless `hash_prefix` is exactly five
    /// hexadecimal characters, otherwise transport errors.
    #[tracing::instrument(skip(self))]
    pub async fn search_passwords_by_range(
        &self,
        hash_prefix: &str,
    ) -> Result<Vec<String>, HibpError> {
        self.range_lines(hash_prefix, &[]).await
    }

    /// Like [`HibpClient::search_passwords_by_range`], against NTLM hashes.
    ///
    /// # Errors
    ///
    /// See [`HibpClient::search_passwords_by_range`].
    #[tracing::instrument(skip(self))]
    pub async fn search_ntlm_passwords_by_range(
        &self,
        hash_prefix: &str,
    ) -> Result<Vec<String>, HibpError> {
        self.range_lines(hash_prefix, &[("mode", "ntlm".to_string())])
            .await
    }

    // ==================== Helpers ====================

    async fn range_lines(
        &self,
        hash_prefix: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<String>, HibpError> {
        const ENDPOINT: &str = "/range/{prefix}";
        if !is_valid_hash_prefix(hash_prefix) {
            return Err(HibpError::invalid_input(
                "hash_prefix",
                format!("'{hash_prefix}' must be exactly 5 hexadecimal characters"),
            ));
        }
        let path = format!("/range/{hash_prefix}");
        match self.passwords.get(&path, &as_pairs(query)).await? {
            ApiResponse::Text(body) => {
                let lines: Vec<String> = body.lines().map(str::to_string).collect();
                debug!(lines = lines.len(), "Range search returned");
                Ok(lines)
            }
            ApiResponse::NotFound => Ok(Vec::new()),
            ApiResponse::Json(_) => Err(HibpError::UnexpectedFormat {
                endpoint: ENDPOINT,
                expected: "plain text",
                found: "JSON",
            }),
        }
    }

    async fn fetch_json(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Option<Value>, HibpError> {
        match self.api.get(path, &as_pairs(query)).await? {
            ApiResponse::Json(value) => Ok(Some(value)),
            ApiResponse::NotFound => {
                debug!(endpoint, "Not found");
                Ok(None)
            }
            ApiResponse::Text(_) => {
                warn!(endpoint, "Expected JSON, received plain text");
                Err(HibpError::UnexpectedFormat {
                    endpoint,
                    expected: "JSON",
                    found: "plain text",
                })
            }
        }
    }

    /// Fetches a collection resource; 404 yields `T::default()` (empty).
    async fn fetch_collection<T>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, HibpError>
    where
        T: DeserializeOwned + Default,
    {
        match self.fetch_json(endpoint, path, query).await? {
            Some(value) => decode(endpoint, value),
            None => Ok(T::default()),
        }
    }

    /// Fetches a singular resource; 404 yields `None`.
    async fn fetch_optional<T>(
        &self,
        endpoint: &'static str,
        path: &str,
    ) -> Result<Option<T>, HibpError>
    where
        T: DeserializeOwned,
    {
        self.fetch_json(endpoint, path, &[])
            .await?
            .map(|value| decode(endpoint, value))
            .transpose()
    }
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, value: Value) -> Result<T, HibpError> {
    serde_json::from_value(value).map_err(|source| {
        warn!(endpoint, error = %source, "Response failed validation");
        HibpError::Validation { endpoint, source }
    })
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, HibpError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(HibpError::invalid_input(field, "must not be empty"));
    }
    Ok(trimmed)
}

fn as_pairs<'a>(query: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    query.iter().map(|(k, v)| (*k, v.as_str())).collect()
}
