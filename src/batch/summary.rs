use std::fmt;

use super::result::{CheckStatus, EmailCheckResult};

/// Running counters for a batch run.
///
/// `processed == succeeded + errored` and `succeeded == with_breaches + clean`
/// hold after every [`BatchSummary::record`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub errored: usize,
    pub with_breaches: usize,
    pub clean: usize,
}

impl BatchSummary {
    /// Counts one result.
    pub fn record(&mut self, result: &EmailCheckResult) {
        self.processed += 1;
        match result.status() {
            CheckStatus::Ok => {
                self.succeeded += 1;
                if result.is_breached() {
                    self.with_breaches += 1;
                } else {
                    self.clean += 1;
                }
            }
            CheckStatus::Error => self.errored += 1,
        }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.processed == self.succeeded + self.errored
            && self.succeeded == self.with_breaches + self.clean
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SUMMARY:")?;
        writeln!(f, "Total emails processed: {}", self.processed)?;
        writeln!(f, "Successful checks: {}", self.succeeded)?;
        writeln!(f, "Errors: {}", self.errored)?;
        writeln!(f, "Emails with breaches: {}", self.with_breaches)?;
        write!(f, "Clean emails: {}", self.clean)
    }
}
