//! Channel-backed observer adapter

use async_trait::async_trait;
use tokio::sync::mpsc;

use jid_availability_core::traits::StateObserver;
use jid_availability_core::types::{DisplayState, ValidationState};

/// A single state-change notification.
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Field the change belongs to.
    pub field_id: String,
    /// New validation state.
    pub state: ValidationState,
    /// Precomputed display data.
    pub display: DisplayState,
}

/// Observer forwarding every change into an unbounded channel.
///
/// Event-loop frontends drain the receiver on their own schedule. A dropped
/// receiver means the frontend shut down; further notifications are
/// discarded silently.
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<StateChange>,
}

impl ChannelObserver {
    /// Create the observer together with its receiving end.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StateChange>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl StateObserver for ChannelObserver {
    async fn state_changed(
        &self,
        field_id: &str,
        state: &ValidationState,
        display: &DisplayState,
    ) {
        let _ = self.tx.send(StateChange {
            field_id: field_id.to_string(),
            state: state.clone(),
            display: display.clone(),
        });
    }
}
