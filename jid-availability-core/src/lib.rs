//! JID Availability Core Library
//!
//! Provides the core logic of the username availability validator, including:
//! - Local syntax validation (length bounds, forbidden characters)
//! - Debounced remote existence checks with stale-response discarding
//! - Pure display-state computation for host UI layers
//!
//! This library is designed to be platform-independent: it never touches a
//! DOM or a form-validation API. Hosts feed input events in, inject an
//! [`ExistenceChecker`](jid_availability_checker::ExistenceChecker)
//! implementation, and consume validity as plain data through the
//! [`StateObserver`](traits::StateObserver) seam.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ServiceContext, ValidatorService};
pub use traits::{NoopObserver, StateObserver};

// Re-export checker types used at the API surface
pub use jid_availability_checker::{CheckRequest, CheckerError, ExistenceChecker};
