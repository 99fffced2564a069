//! Focus state of an editable field, as tracked by page-side collaborators.
//!
//! The core never reads DOM events. Hosts drive this machine from their own
//! focus, input and blur listeners and only talk to the core through
//! request and reply messages.

use serde::{Deserialize, Serialize};

/// Focus state of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFocus {
    /// Never focused, or reset.
    #[default]
    Idle,
    /// Focused with no edits since focus.
    Focused,
    /// Focused and edited.
    Dirty,
    /// Focus left the field.
    Blurred,
}

impl FieldFocus {
    pub fn on_focus(self) -> Self {
        match self {
            FieldFocus::Dirty => FieldFocus::Dirty,
            _ => FieldFocus::Focused,
        }
    }

    /// Input only counts while the field has focus.
    pub fn on_input(self) -> Self {
        match self {
            FieldFocus::Focused | FieldFocus::Dirty => FieldFocus::Dirty,
            other => other,
        }
    }

    pub fn on_blur(self) -> Self {
        match self {
            FieldFocus::Focused | FieldFocus::Dirty => FieldFocus::Blurred,
            other => other,
        }
    }

    pub fn on_reset(self) -> Self {
        FieldFocus::Idle
    }

    /// Whether the trigger button should be shown for this field.
    pub fn can_offer_actions(&self) -> bool {
        matches!(self, FieldFocus::Focused | FieldFocus::Dirty)
    }
}
