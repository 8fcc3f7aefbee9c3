//! HTTP transport for the HIBP and Pwned Passwords services.
//!
//! [`RestClient`] owns one base URL and one decoding strategy. The domain
//! client builds two of them: a JSON-detecting client for the breach API and
//! a plain-text client for the range API.

mod client;
mod error;
mod response;

pub use client::{API_KEY_HEADER, RestClient};
pub use error::{MAX_ERROR_BODY_CHARS, TransportError};
pub use response::{ApiResponse, ResponseDecoding};
