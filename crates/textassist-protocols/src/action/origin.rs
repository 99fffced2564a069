//! Where a request's text came from and how to splice the result back.

use serde::{Deserialize, Serialize};

/// Portion of an editable field covered by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpan {
    /// Replace the whole field value.
    WholeField,
    /// Replace the characters between `start` and `end`.
    Range { start: usize, end: usize },
}

/// Origin of the text an action operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestOrigin {
    /// Free-floating selection in page content. Not editable; the page side
    /// shows the result in a popover anchored at `position`.
    PageSelection {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<serde_json::Value>,
    },

    /// Selection inside an editable field.
    EditableField { span: FieldSpan },
}

impl RequestOrigin {
    pub fn page_selection() -> Self {
        Self::PageSelection { position: None }
    }

    pub fn whole_field() -> Self {
        Self::EditableField {
            span: FieldSpan::WholeField,
        }
    }

    pub fn field_range(start: usize, end: usize) -> Self {
        Self::EditableField {
            span: FieldSpan::Range { start, end },
        }
    }

    /// Whether the result can be written back into the page.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::EditableField { .. })
    }
}

impl Default for RequestOrigin {
    fn default() -> Self {
        Self::page_selection()
    }
}
