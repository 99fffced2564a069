//! Action kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// The closed set of supported text transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Translate,
    Proofread,
    Rewrite,
    Summarize,
    ChangeTone,
    Generate,
}

impl ActionKind {
    /// Every action, in menu order.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Translate,
        ActionKind::Proofread,
        ActionKind::Rewrite,
        ActionKind::Summarize,
        ActionKind::ChangeTone,
        ActionKind::Generate,
    ];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Translate => "translate",
            ActionKind::Proofread => "proofread",
            ActionKind::Rewrite => "rewrite",
            ActionKind::Summarize => "summarize",
            ActionKind::ChangeTone => "changeTone",
            ActionKind::Generate => "generate",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "translate" => Ok(ActionKind::Translate),
            "proofread" => Ok(ActionKind::Proofread),
            "rewrite" => Ok(ActionKind::Rewrite),
            "summarize" | "summarise" => Ok(ActionKind::Summarize),
            "changetone" | "tone" => Ok(ActionKind::ChangeTone),
            "generate" | "write" => Ok(ActionKind::Generate),
            _ => Err(ProtocolError::UnknownAction(s.to_string())),
        }
    }
}
