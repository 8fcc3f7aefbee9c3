//! Email address extraction from free text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Pattern for email-like substrings embedded in arbitrary text.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email regex is valid") // Static pattern, safe to panic
});

/// Extracts every email-like substring from `line`, in order of appearance.
///
/// Surrounding text, brackets and trailing punctuation are not part of a
/// match. Duplicates are kept; each occurrence is a separate lookup.
///
/// # Examples
///
/// ```
/// use hibp_core::parser::extract_emails;
///
/// let found = extract_emails("contact: <alice@example.com>, bob@example.org.");
/// assert_eq!(found, vec!["alice@example.com", "bob@example.org"]);
/// ```
#[must_use]
pub fn extract_emails(line: &str) -> Vec<String> {
    let found: Vec<String> = EMAIL_PATTERN
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect();
    trace!(count = found.len(), "extracted email candidates");
    found
}
