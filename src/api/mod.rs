//! Domain client for the HIBP breach API and the Pwned Passwords API.
//!
//! # Example
//!
//! ```no_run
//! use hibp_core::api::HibpClient;
//!
//! # async fn run() -> Result<(), hibp_core::api::HibpError> {
//! let client = HibpClient::new("my-api-key", "my-tool/1.0")?;
//! for breach in client.get_breaches_for_account("test@example.com").await? {
//!     println!("{} ({} accounts)", breach.title, breach.pwn_count);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod query;

pub use client::{DEFAULT_API_URL, DEFAULT_PASSWORDS_URL, HibpClient};
pub use error::HibpError;
pub use query::{AccountQuery, BreachListQuery};
