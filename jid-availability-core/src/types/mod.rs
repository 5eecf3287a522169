//! Type definitions module

mod display;
mod field;
mod hosts;
mod state;

pub use display::{compute_display_state, DisplayState, GroupClass, MessageKey};
pub use field::{FieldConfig, FieldInput, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use hosts::{HostCatalog, HostEntry};
pub use state::{SyntaxViolation, ValidationState};
