//! Pure display-state computation
//!
//! The decision of *what* to render is separated from *how* it is rendered:
//! [`compute_display_state`] is a pure function the host binding applies to
//! its own UI (CSS classes on a form group, a message element keyed by error
//! kind, blocking form submission).

use serde::{Deserialize, Serialize};

use super::state::ValidationState;

/// State class for the enclosing form group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupClass {
    /// The input is wrong or unusable.
    HasError,
    /// The input is confirmed good.
    HasSuccess,
}

impl GroupClass {
    /// The CSS class name as it appears in the form markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HasError => "has-error",
            Self::HasSuccess => "has-success",
        }
    }
}

/// Which validation message the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKey {
    /// The local syntax message.
    SyntaxInvalid,
    /// The "already exists" message.
    Exists,
    /// The generic failure message.
    Error,
}

impl MessageKey {
    /// The message element key as it appears in the form markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxInvalid => "syntax-invalid",
            Self::Exists => "exists",
            Self::Error => "error",
        }
    }
}

/// What the host should render for a validation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Form-group state class, if any.
    pub group_class: Option<GroupClass>,
    /// Message element to show, keyed by error kind.
    pub message: Option<MessageKey>,
    /// Whether form submission should be blocked in this state.
    pub blocks_submission: bool,
}

/// Compute what to render for `state`.
///
/// Submission is blocked while a check is outstanding or the input is known
/// bad; an untouched field shows nothing and blocks nothing (the server
/// re-validates on submit anyway).
#[must_use]
pub fn compute_display_state(state: &ValidationState) -> DisplayState {
    match state {
        ValidationState::Untouched => DisplayState {
            group_class: None,
            message: None,
            blocks_submission: false,
        },
        ValidationState::SyntaxInvalid { .. } => DisplayState {
            group_class: Some(GroupClass::HasError),
            message: Some(MessageKey::SyntaxInvalid),
            blocks_submission: true,
        },
        ValidationState::Pending => DisplayState {
            group_class: None,
            message: None,
            blocks_submission: true,
        },
        ValidationState::Available => DisplayState {
            group_class: Some(GroupClass::HasSuccess),
            message: None,
            blocks_submission: false,
        },
        ValidationState::Taken => DisplayState {
            group_class: Some(GroupClass::HasError),
            message: Some(MessageKey::Exists),
            blocks_submission: true,
        },
        ValidationState::Error => DisplayState {
            group_class: Some(GroupClass::HasError),
            message: Some(MessageKey::Error),
            blocks_submission: true,
        },
    }
}
