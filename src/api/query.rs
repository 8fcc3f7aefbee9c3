//! Optional filters for the breach listing endpoints.

/// Filters for `/breachedaccount/{account}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountQuery {
    /// Only return breaches against this domain.
    pub domain: Option<String>,
    /// Include unverified breaches (the service default).
    pub include_unverified: bool,
}

impl Default for AccountQuery {
    fn default() -> Self {
        Self {
            domain: None,
            include_unverified: true,
        }
    }
}

impl AccountQuery {
    /// Restricts results to breaches of `domain`.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Excludes unverified breaches.
    #[must_use]
    pub fn verified_only(mut self) -> Self {
        self.include_unverified = false;
        self
    }

    /// Query parameters, omitting values equal to the service defaults.
    pub(crate) fn params(&self, truncate: bool) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !truncate {
            params.push(("truncateResponse", "false".to_string()));
        }
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            params.push(("domain", domain.to_string()));
        }
        if !self.include_unverified {
            params.push(("includeUnverified", "false".to_string()));
        }
        params
    }
}

/// Filters for `/breaches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreachListQuery {
    /// Only return breaches against this domain.
    pub domain: Option<String>,
    /// Only return spam lists (`Some(true)`) or only non-spam lists (`Some(false)`).
    pub is_spam_list: Option<bool>,
}

impl BreachListQuery {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            params.push(("Domain", domain.to_string()));
        }
        if let Some(spam) = self.is_spam_list {
            params.push(("IsSpamList", spam.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_query_default_truncated_has_no_params() {
        assert!(AccountQuery::default().params(true).is_empty());
    }

    #[test]
    fn test_account_query_full_params() {
        let q = AccountQuery::default().with_domain("adobe.com").verified_only();
        assert_eq!(
            q.params(false),
            vec![
                ("truncateResponse", "false".to_string()),
                ("domain", "adobe.com".to_string()),
                ("includeUnverified", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_account_query_empty_domain_ignored() {
        let q = AccountQuery::default().with_domain("");
        assert!(q.params(true).is_empty());
    }

    #[test]
    fn test_breach_list_query_params() {
        let q = BreachListQuery {
            domain: Some("adobe.com".into()),
            is_spam_list: Some(false),
        };
        assert_eq!(
            q.params(),
            vec![
                ("Domain", "adobe.com".to_string()),
                ("IsSpamList", "false".to_string()),
            ]
        );
        assert!(BreachListQuery::default().params().is_empty());
    }
}
