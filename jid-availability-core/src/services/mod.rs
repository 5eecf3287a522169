//! Business logic service layer

mod validator_service;

pub use validator_service::ValidatorService;

use std::sync::Arc;
use std::time::Duration;

use jid_availability_checker::ExistenceChecker;

use crate::traits::StateObserver;
use crate::types::HostCatalog;

/// Default quiet period before a scheduled existence check fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects its own checker and
/// observer implementations.
pub struct ServiceContext {
    /// Existence-check endpoint
    pub checker: Arc<dyn ExistenceChecker>,
    /// Rendering seam
    pub observer: Arc<dyn StateObserver>,
    /// Deployment host catalog
    pub hosts: HostCatalog,
    /// Quiet period before a scheduled check fires
    pub debounce: Duration,
}

impl ServiceContext {
    /// Create a service context with the default debounce interval.
    #[must_use]
    pub fn new(
        checker: Arc<dyn ExistenceChecker>,
        observer: Arc<dyn StateObserver>,
        hosts: HostCatalog,
    ) -> Self {
        Self {
            checker,
            observer,
            hosts,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Override the debounce interval.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
