//! Host-side abstraction trait definitions

mod state_observer;

pub use state_observer::{NoopObserver, StateObserver};
