use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A paste containing the account, from `/pasteaccount/{account}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    /// Paste service, e.g. "Pastebin".
    #[serde(alias = "Source")]
    pub source: String,
    /// Identifier at the source service.
    #[serde(alias = "Id")]
    pub id: String,
    /// Not every source exposes titles.
    #[serde(alias = "Title", default)]
    pub title: Option<String>,
    /// Not every source exposes a posting date.
    #[serde(alias = "Date", default, deserialize_with = "timestamp::option")]
    pub date: Option<DateTime<Utc>>,
    /// Number of addresses found in the paste.
    #[serde(alias = "EmailCount")]
    pub email_count: u64,
}
