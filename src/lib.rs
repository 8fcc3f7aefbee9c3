//! HIBP Core Library
//!
//! Client library for the Have I Been Pwned breach API and the Pwned
//! Passwords range API, plus the batch runner behind the `hibp-checker` CLI.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`transport`] - Authenticated HTTP requests and JSON/plain-text classification
//! - [`api`] - One typed accessor per HIBP endpoint
//! - [`models`] - Breach, paste, subscription and password range records
//! - [`parser`] - Email address extraction from free text
//! - [`batch`] - Sequential per-address checking and report output
//! - [`config`] - API key and endpoint settings from the environment

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod batch;
pub mod config;
pub mod models;
pub mod parser;
pub mod transport;
pub mod user_agent;

// Re-export commonly used types
pub use api::{AccountQuery, BreachListQuery, HibpClient, HibpError};
pub use batch::{BatchReport, BatchSummary, BreachLookup, EmailCheckResult, run_batch};
pub use config::{Config, ConfigError};
pub use models::{Breach, BreachName, DataClass, Paste, SubscribedDomain, SubscriptionStatus};
pub use parser::extract_emails;
pub use transport::{ApiResponse, ResponseDecoding, RestClient, TransportError};
