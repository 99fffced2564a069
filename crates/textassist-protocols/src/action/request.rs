//! Action request and result values.

use serde::{Deserialize, Serialize};

use super::{ActionKind, ActionParameters, RequestOrigin};

/// A request to run one action over a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub text: String,
    pub parameters: ActionParameters,
    #[serde(default)]
    pub origin: RequestOrigin,
}

impl ActionRequest {
    pub fn new(parameters: ActionParameters, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters,
            origin: RequestOrigin::default(),
        }
    }

    pub fn with_origin(mut self, origin: RequestOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn action(&self) -> ActionKind {
        self.parameters.kind()
    }
}

/// Outcome of an action.
///
/// `result_text` is non-empty whenever `original_text` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub action: ActionKind,
    pub original_text: String,
    pub result_text: String,
    pub origin: RequestOrigin,
    /// True when the rule-based fallback produced `result_text`.
    pub used_fallback: bool,
    /// Informational message for the user when the result is degraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl ActionResult {
    pub fn is_unchanged(&self) -> bool {
        self.result_text == self.original_text
    }
}
