//! Subscription metadata: subscribed domains and the key's subscription status.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timestamp;

/// A domain verified for domain search, from `/subscribeddomains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedDomain {
    /// The verified domain.
    #[serde(alias = "DomainName")]
    pub domain_name: String,
    /// Breached addresses on the domain; null until the first search.
    #[serde(alias = "PwnCount", default)]
    pub pwn_count: Option<u64>,
    /// Breached addresses, not counting spam lists.
    #[serde(alias = "PwnCountExcludingSpamLists", default)]
    pub pwn_count_excluding_spam_lists: Option<u64>,
    /// Same count as of the last renewal; sizes the required subscription.
    #[serde(
        alias = "PwnCountExcludingSpamListsAtLastSubscriptionRenewal",
        default
    )]
    pub pwn_count_excluding_spam_lists_at_last_subscription_renewal: Option<u64>,
    /// When the current subscription ends.
    #[serde(
        alias = "NextSubscriptionRenewal",
        default,
        deserialize_with = "timestamp::option"
    )]
    pub next_subscription_renewal: Option<DateTime<Utc>>,
}

/// Status of the subscription tied to the API key, from `/subscription/status`.
///
/// Only part of this payload is documented, so keys not modelled below are
/// kept in [`SubscriptionStatus::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    /// Tier name, e.g. "Pwned 1".
    #[serde(alias = "SubscriptionName", default)]
    pub subscription_name: Option<String>,
    /// Human-readable summary of the tier.
    #[serde(alias = "Description", default)]
    pub description: Option<String>,
    /// When the subscription expires.
    #[serde(
        alias = "SubscribedUntil",
        default,
        deserialize_with = "timestamp::option"
    )]
    pub subscribed_until: Option<DateTime<Utc>>,
    /// Requests per minute allowed for the key.
    #[serde(alias = "Rpm", default)]
    pub rpm: Option<u32>,
    /// Largest domain searchable; null means unlimited.
    #[serde(alias = "DomainSearchMaxBreachedAccounts", default)]
    pub domain_search_max_breached_accounts: Option<u64>,
    /// Whether the tier can query stealer logs.
    #[serde(alias = "IncludesStealerLogs", default)]
    pub includes_stealer_logs: Option<bool>,
    /// Undocumented keys, kept as sent.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
