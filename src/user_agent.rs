//! Shared User-Agent string for HIBP and Pwned Passwords requests.
//!
//! HIBP rejects requests without a User-Agent, so every client falls back to
//! this value when none is configured.

/// Default User-Agent for API requests (identifies the tool and version).
#[must_use]
pub fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("hibp-checker/{version}")
}
