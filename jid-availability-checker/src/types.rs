//! Request and configuration types for the existence check.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds). The check is interactive, so this is
/// deliberately shorter than a background-job timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// A single existence-check request, labeled with the exact values it
/// validates.
///
/// The caller keeps this label around to match the eventual response against
/// the field's current input; a response for a superseded label is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Local part of the JID. Lowercased on construction — JIDs are
    /// case-insensitive and the endpoint normalizes the same way.
    pub username: String,
    /// Domain the username is checked under.
    pub domain: String,
}

impl CheckRequest {
    /// Build a request from raw input values.
    #[must_use]
    pub fn new(username: &str, domain: &str) -> Self {
        Self {
            username: username.to_lowercase(),
            domain: domain.to_lowercase(),
        }
    }

    /// The full JID this request asks about.
    #[must_use]
    pub fn jid(&self) -> String {
        format!("{}@{}", self.username, self.domain)
    }
}

/// Configuration for [`HttpExistenceChecker`](crate::HttpExistenceChecker).
#[derive(Debug, Clone)]
pub struct HttpCheckerConfig {
    /// Endpoint accepting form-encoded `{username, domain}` POSTs.
    pub endpoint: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl HttpCheckerConfig {
    /// Configuration with default timeouts.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
