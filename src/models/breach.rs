//! Breach records returned by the breach endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{DataClass, timestamp};

/// A breach as returned by `/breaches`, `/breach/{name}`, `/latestbreach`
/// and the untruncated `/breachedaccount/{account}`.
///
/// Every field accepts the service's PascalCase key or the snake_case field
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breach {
    /// Pascal-cased unique name, stable across API calls.
    #[serde(alias = "Name")]
    pub name: String,
    /// Descriptive title suitable for display.
    #[serde(alias = "Title")]
    pub title: String,
    /// Domain of the primary website; may be empty.
    #[serde(alias = "Domain")]
    pub domain: String,
    /// Date the breach occurred (no time component).
    #[serde(alias = "BreachDate")]
    pub breach_date: NaiveDate,
    /// When the breach was added to HIBP.
    #[serde(alias = "AddedDate", deserialize_with = "timestamp::required")]
    pub added_date: DateTime<Utc>,
    /// When the breach was last modified in HIBP.
    #[serde(alias = "ModifiedDate", deserialize_with = "timestamp::required")]
    pub modified_date: DateTime<Utc>,
    /// Number of accounts loaded into the system.
    #[serde(alias = "PwnCount")]
    pub pwn_count: u64,
    /// HTML overview of the incident.
    #[serde(alias = "Description")]
    pub description: String,
    /// Logo URI or path.
    #[serde(alias = "LogoPath")]
    pub logo_path: String,
    /// Categories of data exposed.
    #[serde(alias = "DataClasses")]
    pub data_classes: Vec<DataClass>,
    /// Breach has been confirmed as legitimate.
    #[serde(alias = "IsVerified")]
    pub is_verified: bool,
    /// Data is likely not sourced from the named website.
    #[serde(alias = "IsFabricated")]
    pub is_fabricated: bool,
    /// Only shown to the verified owner of an address.
    #[serde(alias = "IsSensitive")]
    pub is_sensitive: bool,
    /// Removed from public search.
    #[serde(alias = "IsRetired")]
    pub is_retired: bool,
    /// Spam list rather than a website breach.
    #[serde(alias = "IsSpamList")]
    pub is_spam_list: bool,
    /// Sourced from a malware campaign.
    #[serde(alias = "IsMalware")]
    pub is_malware: bool,
    /// Older records omit this flag.
    #[serde(alias = "IsStealerLog", default)]
    pub is_stealer_log: bool,
    /// Older records omit this flag.
    #[serde(alias = "IsSubscriptionFree", default)]
    pub is_subscription_free: bool,
}

impl Breach {
    /// Returns true if `class` is among the exposed data classes (case-insensitive).
    #[must_use]
    pub fn exposes(&self, class: &str) -> bool {
        self.data_classes
            .iter()
            .any(|dc| dc.as_str().eq_ignore_ascii_case(class))
    }
}

/// Truncated breach record: only the unique name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreachName {
    #[serde(alias = "Name")]
    pub name: String,
}

impl From<Breach> for BreachName {
    fn from(breach: Breach) -> Self {
        Self { name: breach.name }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    fn adobe_json() -> serde_json::Value {
        json!({
            "Name": "Adobe",
            "Title": "Adobe",
            "Domain": "adobe.com",
            "BreachDate": "2013-10-04",
            "AddedDate": "2013-12-04T00:00:00Z",
            "ModifiedDate": "2022-05-15T23:52:49Z",
            "PwnCount": 152_445_165,
            "Description": "In October 2013, 153 million Adobe accounts were breached.",
            "LogoPath": "Adobe.png",
            "DataClasses": ["Email addresses", "Password hints", "Passwords", "Usernames"],
            "IsVerified": true,
            "IsFabricated": false,
            "IsSensitive": false,
            "IsRetired": false,
            "IsSpamList": false,
            "IsMalware": false,
            "IsStealerLog": false,
            "IsSubscriptionFree": false
        })
    }

    #[test]
    fn test_breach_parses_api_keys() {
        let breach: Breach = serde_json::from_value(adobe_json()).unwrap();
        assert_eq!(breach.name, "Adobe");
        assert_eq!(breach.domain, "adobe.com");
        assert_eq!(breach.pwn_count, 152_445_165);
        assert_eq!(breach.breach_date.year(), 2013);
        assert_eq!(breach.added_date.month(), 12);
        assert_eq!(breach.data_classes.len(), 4);
        assert!(breach.is_verified);
        assert!(breach.exposes("passwords"));
        assert!(!breach.exposes("Phone numbers"));
    }

    #[test]
    fn test_breach_normalized_and_api_keys_resolve_identically() {
        let from_api: Breach = serde_json::from_value(adobe_json()).unwrap();
        // Serialization uses the normalized names, so this is the snake_case form.
        let normalized = serde_json::to_value(&from_api).unwrap();
        assert!(normalized.get("breach_date").is_some());
        assert!(normalized.get("BreachDate").is_none());
        let from_normalized: Breach = serde_json::from_value(normalized).unwrap();
        assert_eq!(from_api, from_normalized);
    }

    #[test]
    fn test_breach_mixed_key_forms() {
        let mut value = adobe_json();
        let obj = value.as_object_mut().unwrap();
        let count = obj.remove("PwnCount").unwrap();
        obj.insert("pwn_count".into(), count);
        let breach: Breach = serde_json::from_value(value).unwrap();
        assert_eq!(breach.pwn_count, 152_445_165);
    }

    #[test]
    fn test_breach_optional_flags_default_false() {
        let mut value = adobe_json();
        let obj = value.as_object_mut().unwrap();
        obj.remove("IsStealerLog");
        obj.remove("IsSubscriptionFree");
        let breach: Breach = serde_json::from_value(value).unwrap();
        assert!(!breach.is_stealer_log);
        assert!(!breach.is_subscription_free);
    }

    #[test]
    fn test_breach_missing_required_field_fails() {
        let mut value = adobe_json();
        value.as_object_mut().unwrap().remove("Title");
        let err = serde_json::from_value::<Breach>(value).unwrap_err();
        assert!(err.to_string().contains("title"), "got: {err}");
    }

    #[test]
    fn test_breach_type_mismatch_fails() {
        let mut value = adobe_json();
        value["PwnCount"] = json!("lots");
        assert!(serde_json::from_value::<Breach>(value).is_err());
    }

    #[test]
    fn test_breach_bad_date_fails() {
        let mut value = adobe_json();
        value["BreachDate"] = json!("October 2013");
        assert!(serde_json::from_value::<Breach>(value).is_err());
    }

    #[test]
    fn test_breach_offsetless_timestamps_read_as_utc() {
        let mut value = adobe_json();
        value["AddedDate"] = json!("2013-12-04T00:00:00");
        value["ModifiedDate"] = json!("2022-05-15T23:52:49.123");
        let breach: Breach = serde_json::from_value(value).unwrap();
        assert_eq!(breach.added_date.to_rfc3339(), "2013-12-04T00:00:00+00:00");
        assert_eq!(breach.modified_date.timestamp(), 1_652_658_769);
    }

    #[test]
    fn test_breach_bad_timestamp_fails() {
        let mut value = adobe_json();
        value["AddedDate"] = json!("yesterday");
        assert!(serde_json::from_value::<Breach>(value).is_err());
    }

    #[test]
    fn test_breach_ignores_unknown_keys() {
        let mut value = adobe_json();
        value["Attribution"] = json!("someone");
        assert!(serde_json::from_value::<Breach>(value).is_ok());
    }

    #[test]
    fn test_breach_name_parses_both_key_forms() {
        let upper: BreachName = serde_json::from_value(json!({"Name": "Gawker"})).unwrap();
        let lower: BreachName = serde_json::from_value(json!({"name": "Gawker"})).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Gawker");
    }

    #[test]
    fn test_breach_name_requires_name() {
        assert!(serde_json::from_value::<BreachName>(json!({"Title": "Gawker"})).is_err());
    }

    #[test]
    fn test_breach_name_from_breach() {
        let breach: Breach = serde_json::from_value(adobe_json()).unwrap();
        assert_eq!(BreachName::from(breach).name, "Adobe");
    }
}
