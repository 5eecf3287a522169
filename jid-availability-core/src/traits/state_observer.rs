//! Rendering seam abstract Trait

use async_trait::async_trait;

use crate::types::{DisplayState, ValidationState};

/// Receives validation-state changes for rendering.
///
/// Platform implementations:
/// - DOM binding: toggle the form-group class, show the keyed message
///   element, block submission while `blocks_submission` is set
/// - Event-loop frontends: `ChannelObserver` (app crate)
#[async_trait]
pub trait StateObserver: Send + Sync {
    /// Called after every state transition of `field_id`.
    ///
    /// `display` is precomputed from `state`; hosts that only render can
    /// ignore `state` entirely.
    async fn state_changed(
        &self,
        field_id: &str,
        state: &ValidationState,
        display: &DisplayState,
    );
}

/// Observer for hosts that poll the service instead of subscribing.
pub struct NoopObserver;

#[async_trait]
impl StateObserver for NoopObserver {
    async fn state_changed(
        &self,
        _field_id: &str,
        _state: &ValidationState,
        _display: &DisplayState,
    ) {
    }
}
