use async_trait::async_trait;

use crate::error::Result;
use crate::types::CheckRequest;

/// Existence-check endpoint abstraction.
///
/// Platform implementations:
/// - `HttpExistenceChecker` — production, POSTs to the account API
/// - mock checkers in test suites
#[async_trait]
pub trait ExistenceChecker: Send + Sync {
    /// Checker identifier (for logging).
    fn id(&self) -> &'static str;

    /// Ask whether the JID in `request` is still free.
    ///
    /// `Ok(())` means the username/domain combination does not exist and can
    /// be registered. [`CheckerError::JidExists`](crate::CheckerError::JidExists)
    /// means it is taken; any other error is a transport fault.
    async fn check(&self, request: &CheckRequest) -> Result<()>;
}
