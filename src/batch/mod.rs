//! Batch email checking.
//!
//! The runner is the error boundary of the tool: every per-address failure is
//! turned into an `error` report line and the run continues.
//!
//! # Example
//!
//! ```no_run
//! use hibp_core::api::HibpClient;
//! use hibp_core::batch::run_batch;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HibpClient::new("my-api-key", "my-tool/1.0")?;
//! let input = "alice@example.com\nbob@example.org\n";
//! let mut out = std::io::stdout();
//! let report = run_batch(&client, input.as_bytes(), &mut out).await?;
//! assert!(report.summary.is_consistent());
//! # Ok(())
//! # }
//! ```

mod result;
mod runner;
mod summary;

pub use result::{CheckOutcome, CheckStatus, EmailCheckResult};
pub use runner::{
    BatchError, BatchReport, BreachLookup, NO_EMAIL_MESSAGE, check_email, run_batch,
    write_header, write_report,
};
pub use summary::BatchSummary;
