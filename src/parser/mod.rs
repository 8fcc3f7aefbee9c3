//! Input parsing for the batch checker.
//!
//! Input files are free text: one address per line, CSV rows, mail headers
//! or prose. Extraction is pattern based and works line by line.

mod email;

pub use email::extract_emails;
