//! Platform-agnostic application bootstrap for the JID availability validator.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter
//! injection). Every frontend constructs this once per page/window, then
//! feeds host events into [`AppState::validator`].

pub mod adapters;

use std::sync::Arc;
use std::time::Duration;

use jid_availability_core::error::{CoreError, CoreResult};
use jid_availability_core::services::ServiceContext;
use jid_availability_core::traits::{NoopObserver, StateObserver};
use jid_availability_core::types::HostCatalog;
use jid_availability_core::{ExistenceChecker, ValidatorService};

/// Platform-agnostic application state.
///
/// Holds the validator service and the `ServiceContext`. Construct it via
/// [`AppStateBuilder`].
pub struct AppState {
    /// Service context (holds the injected adapters)
    pub ctx: Arc<ServiceContext>,
    /// Username availability validator
    pub validator: Arc<ValidatorService>,
}

/// Builder for [`AppState`] — frontends inject their checker and observer
/// implementations here.
pub struct AppStateBuilder {
    checker: Option<Arc<dyn ExistenceChecker>>,
    observer: Option<Arc<dyn StateObserver>>,
    hosts: Option<HostCatalog>,
    debounce: Option<Duration>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            checker: None,
            observer: None,
            hosts: None,
            debounce: None,
        }
    }

    /// Existence-check endpoint implementation (required).
    #[must_use]
    pub fn checker(mut self, checker: Arc<dyn ExistenceChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Rendering seam. Defaults to [`NoopObserver`] for frontends that poll.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Deployment host catalog (required).
    #[must_use]
    pub fn hosts(mut self, hosts: HostCatalog) -> Self {
        self.hosts = Some(hosts);
        self
    }

    /// Override the debounce quiet period.
    #[must_use]
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if required adapters are missing
    /// or the catalog's default domain is not a managed host.
    pub fn build(self) -> CoreResult<AppState> {
        let checker = self
            .checker
            .ok_or_else(|| CoreError::InvalidConfig("checker is required".to_string()))?;
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(NoopObserver) as Arc<dyn StateObserver>);
        let hosts = self
            .hosts
            .ok_or_else(|| CoreError::InvalidConfig("host catalog is required".to_string()))?;

        if !hosts.is_selectable(hosts.default_domain(), false) {
            return Err(CoreError::InvalidConfig(format!(
                "default domain {} is not a managed host",
                hosts.default_domain()
            )));
        }
        if self.debounce == Some(Duration::ZERO) {
            return Err(CoreError::InvalidConfig(
                "debounce interval must be non-zero".to_string(),
            ));
        }

        let mut ctx = ServiceContext::new(checker, observer, hosts);
        if let Some(debounce) = self.debounce {
            ctx = ctx.with_debounce(debounce);
        }
        let ctx = Arc::new(ctx);

        log::debug!("[App] State built, debounce {:?}", ctx.debounce);
        let validator = Arc::new(ValidatorService::new(Arc::clone(&ctx)));

        Ok(AppState { ctx, validator })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
