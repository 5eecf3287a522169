//! Platform-agnostic observer adapters for event-loop frontends (TUI, shell
//! wrappers, IPC bridges).

mod channel_observer;

pub use channel_observer::{ChannelObserver, StateChange};
