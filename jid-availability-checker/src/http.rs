//! HTTP implementation of the existence checker.
//!
//! Sends form-encoded POSTs to the account API and maps the bare status-code
//! answer onto [`CheckerError`]. Responses carry no body worth parsing; the
//! status code is the whole protocol.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{CheckerError, Result};
use crate::traits::ExistenceChecker;
use crate::types::{CheckRequest, HttpCheckerConfig};

/// Existence checker backed by the account API over HTTP.
pub struct HttpExistenceChecker {
    client: Client,
    config: HttpCheckerConfig,
}

impl HttpExistenceChecker {
    /// Build a checker with its own connection pool and timeouts.
    pub fn new(config: HttpCheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CheckerError::InvalidEndpoint {
                detail: format!("HTTP client initialization failed: {e}"),
            })?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ExistenceChecker for HttpExistenceChecker {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn check(&self, request: &CheckRequest) -> Result<()> {
        log::debug!(
            "[Checker] POST {} ({})",
            self.config.endpoint,
            request.jid()
        );

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .form(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CheckerError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    CheckerError::NetworkError {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("[Checker] Response status: {status}");

        map_status(status, request)
    }
}

/// Map an endpoint status code onto the check outcome.
fn map_status(status: u16, request: &CheckRequest) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        409 => Err(CheckerError::JidExists {
            username: request.username.clone(),
            domain: request.domain.clone(),
        }),
        // Gateway errors are transport faults, not protocol answers
        502..=504 => Err(CheckerError::NetworkError {
            detail: format!("HTTP {status}"),
        }),
        _ => Err(CheckerError::UnexpectedStatus { status }),
    }
}
