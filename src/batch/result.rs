//! Per-address check outcome and its report line.

use std::fmt;

/// Status tag of a check: the `status` field of a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Error,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What a lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Lookup succeeded; empty when the address is clean.
    Breaches(Vec<String>),
    /// Lookup failed with a single-line message.
    Failed(String),
}

/// Outcome of checking one address. Renders as `<address>:<status>:<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCheckResult {
    pub email: String,
    pub outcome: CheckOutcome,
}

impl EmailCheckResult {
    /// A successful lookup.
    #[must_use]
    pub fn ok(email: impl Into<String>, breaches: Vec<String>) -> Self {
        Self {
            email: email.into(),
            outcome: CheckOutcome::Breaches(breaches),
        }
    }

    /// A failed lookup. Line breaks in `message` are flattened to spaces.
    #[must_use]
    pub fn error(email: impl Into<String>, message: &str) -> Self {
        let message = message
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            email: email.into(),
            outcome: CheckOutcome::Failed(message),
        }
    }

    #[must_use]
    pub fn status(&self) -> CheckStatus {
        match self.outcome {
            CheckOutcome::Breaches(_) => CheckStatus::Ok,
            CheckOutcome::Failed(_) => CheckStatus::Error,
        }
    }

    /// Breach names for successful lookups; empty for failures.
    #[must_use]
    pub fn breaches(&self) -> &[String] {
        match &self.outcome {
            CheckOutcome::Breaches(names) => names,
            CheckOutcome::Failed(_) => &[],
        }
    }

    /// True for a successful lookup with at least one breach.
    #[must_use]
    pub fn is_breached(&self) -> bool {
        !self.breaches().is_empty()
    }
}

impl fmt::Display for EmailCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CheckOutcome::Breaches(names) => {
                write!(f, "{}:{}:{}", self.email, self.status(), names.join(" "))
            }
            CheckOutcome::Failed(message) => {
                write!(f, "{}:{}:{message}", self.email, self.status())
            }
        }
    }
}
