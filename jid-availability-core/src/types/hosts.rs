//! Deployment host catalog
//!
//! A deployment serves one or more XMPP domains; not all of them accept new
//! registrations, and some are listed but not managed here at all. The
//! catalog decides which domains a field's selector may offer.

use serde::{Deserialize, Serialize};

/// A single configured XMPP host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostEntry {
    /// Domain name.
    pub domain: String,
    /// Whether the host accepts new registrations.
    pub registration: bool,
    /// Whether accounts on this host are managed by this deployment.
    pub managed: bool,
}

impl HostEntry {
    /// A managed host open for registration.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            registration: true,
            managed: true,
        }
    }

    /// Close the host for new registrations.
    #[must_use]
    pub fn closed(mut self) -> Self {
        self.registration = false;
        self
    }

    /// Mark the host as not managed here.
    #[must_use]
    pub fn unmanaged(mut self) -> Self {
        self.managed = false;
        self
    }
}

/// The set of domains a deployment offers, with a default selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostCatalog {
    entries: Vec<HostEntry>,
    default_domain: String,
}

impl HostCatalog {
    /// Build a catalog. `default_domain` is the selector's initial value.
    #[must_use]
    pub fn new(entries: Vec<HostEntry>, default_domain: impl Into<String>) -> Self {
        Self {
            entries,
            default_domain: default_domain.into(),
        }
    }

    /// The selector's initial domain.
    #[must_use]
    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    /// Domains selectable by a field. Registering fields only see managed
    /// hosts that are open for registration; other fields see every managed
    /// host.
    #[must_use]
    pub fn selectable(&self, register: bool) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.managed && (!register || e.registration))
            .map(|e| e.domain.as_str())
            .collect()
    }

    /// Whether `domain` may be selected by a field.
    #[must_use]
    pub fn is_selectable(&self, domain: &str, register: bool) -> bool {
        self.entries
            .iter()
            .any(|e| e.domain.eq_ignore_ascii_case(domain) && e.managed && (!register || e.registration))
    }

    /// Whether the selector should be rendered disabled (single choice).
    #[must_use]
    pub fn is_locked(&self, register: bool) -> bool {
        self.selectable(register).len() == 1
    }
}
