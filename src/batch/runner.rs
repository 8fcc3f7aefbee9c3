//! Sequential batch loop: read lines, extract addresses, look each one up.

use std::io::{BufRead, Write};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{AccountQuery, HibpClient, HibpError};
use crate::parser::extract_emails;

use super::result::EmailCheckResult;
use super::summary::BatchSummary;

/// Message recorded for non-blank lines that contain no address.
pub const NO_EMAIL_MESSAGE: &str = "no email address found";

const RULE_WIDTH: usize = 60;

/// Source of breach names for one account.
///
/// [`HibpClient`] is the production implementation; tests substitute stubs.
#[async_trait]
pub trait BreachLookup: Send + Sync {
    /// Breach names for `account`; empty when the account is clean.
    async fn breach_names(&self, account: &str) -> Result<Vec<String>, HibpError>;
}

#[async_trait]
impl BreachLookup for HibpClient {
    async fn breach_names(&self, account: &str) -> Result<Vec<String>, HibpError> {
        let names = self
            .get_breach_names_for_account(account, &AccountQuery::default())
            .await?;
        Ok(names.into_iter().map(|b| b.name).collect())
    }
}

/// Errors that abort a whole run. Per-address failures never do.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input could not be read (I/O failure or invalid UTF-8).
    #[error("could not read input at line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error("could not write report: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },
}

/// Everything a run produced.
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub results: Vec<EmailCheckResult>,
    pub summary: BatchSummary,
}

impl BatchReport {
    fn push(&mut self, result: EmailCheckResult) {
        self.summary.record(&result);
        self.results.push(result);
    }
}

/// Looks up one address. Every error becomes an `error` result.
#[tracing::instrument(skip(lookup))]
pub async fn check_email(lookup: &dyn BreachLookup, email: &str) -> EmailCheckResult {
    match lookup.breach_names(email).await {
        Ok(names) => {
            debug!(breaches = names.len(), "Lookup succeeded");
            EmailCheckResult::ok(email, names)
        }
        Err(e) => {
            warn!(error = %e, rate_limited = e.is_rate_limited(), "Lookup failed");
            EmailCheckResult::error(email, &e.summary())
        }
    }
}

/// Writes the run header: input name and masked API key.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_header<W: Write>(out: &mut W, source: &str, masked_key: &str) -> std::io::Result<()> {
    writeln!(out, "Checking emails from: {source}")?;
    writeln!(out, "Using API key: {masked_key}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Runs the batch over `input`, writing progress and the final report to `out`.
///
/// Addresses are checked one at a time in input order. Blank lines are
/// skipped; a non-blank line with no address yields one `error` result keyed
/// by the trimmed line. No lookup is retried.
///
/// # Errors
///
/// Returns [`BatchError::Read`] if the input cannot be read and
/// [`BatchError::Write`] if the report cannot be written.
pub async fn run_batch<R, W>(
    lookup: &dyn BreachLookup,
    input: R,
    out: &mut W,
) -> Result<BatchReport, BatchError>
where
    R: BufRead,
    W: Write,
{
    let mut report = BatchReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|source| BatchError::Read {
            line: index + 1,
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let emails = extract_emails(line);
        if emails.is_empty() {
            debug!(line_number = index + 1, "No email address on line");
            let key = line_key(line);
            let result = EmailCheckResult::error(key.as_str(), NO_EMAIL_MESSAGE);
            writeln!(out, "Checking: {key}")?;
            writeln!(out, "  Result: {result}")?;
            report.push(result);
            continue;
        }

        for email in emails {
            writeln!(out, "Checking: {email}")?;
            out.flush()?;
            let result = check_email(lookup, &email).await;
            writeln!(out, "  Result: {result}")?;
            report.push(result);
        }
    }

    write_report(out, &report)?;
    info!(
        processed = report.summary.processed,
        succeeded = report.summary.succeeded,
        errored = report.summary.errored,
        breached = report.summary.with_breaches,
        "Batch complete"
    );
    Ok(report)
}

/// Report key for a line with no address. `:` separates report fields, so
/// it is replaced and the surrounding whitespace collapsed.
fn line_key(line: &str) -> String {
    line.replace(':', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the summary block followed by every result line.
///
/// # Errors
///
/// Returns the underlying I/O error if writing fails.
pub fn write_report<W: Write>(out: &mut W, report: &BatchReport) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", report.summary)?;
    writeln!(out)?;
    writeln!(out, "FINAL RESULTS:")?;
    for result in &report.results {
        writeln!(out, "{result}")?;
    }
    out.flush()
}
