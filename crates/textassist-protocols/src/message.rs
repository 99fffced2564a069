//! Wire messages exchanged with page-side collaborators.
//!
//! Field names are camelCase JSON. Everything except `action` is optional on
//! the way in, so hosts can send the minimal shape for each origin.

use serde::{Deserialize, Serialize};

use crate::action::{
    ActionKind, ActionParameters, ActionRequest, ActionResult, FieldSpan, RequestOrigin,
    RewriteStyle, SummaryLength, Tone, TranslateParams,
};
use crate::error::ProtocolError;

/// Inbound action request as sent by a page-side host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMessage {
    /// Opaque correlation id, echoed on the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub action: String,

    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    #[serde(default)]
    pub is_right_click: bool,

    #[serde(default)]
    pub is_input_field: bool,

    #[serde(default)]
    pub is_full_text: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_start: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_end: Option<usize>,

    /// Opaque anchor for page selections, echoed untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

impl RequestMessage {
    pub fn new(action: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Parse a message from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn kind(&self) -> Result<ActionKind, ProtocolError> {
        self.action.parse()
    }

    /// Build the typed request.
    ///
    /// Unknown tone, style or length ids are kept as `None` so the engine can
    /// substitute its defaults. Only an unknown action or an inverted span is
    /// an error.
    pub fn to_request(&self) -> Result<ActionRequest, ProtocolError> {
        let parameters = match self.kind()? {
            ActionKind::Translate => ActionParameters::Translate(TranslateParams {
                target_language_code: non_empty(&self.target_language).unwrap_or_default(),
                target_language_name: non_empty(&self.language_name),
                source_language_code: non_empty(&self.source_language)
                    .unwrap_or_else(|| "auto".to_string()),
            }),
            ActionKind::Proofread => ActionParameters::Proofread,
            ActionKind::Rewrite => ActionParameters::Rewrite {
                style: match &self.style {
                    None => Some(RewriteStyle::default()),
                    Some(id) => RewriteStyle::from_id(id),
                },
            },
            ActionKind::Summarize => ActionParameters::Summarize {
                length: match &self.length {
                    None => Some(SummaryLength::default()),
                    Some(id) => SummaryLength::from_id(id),
                },
            },
            ActionKind::ChangeTone => ActionParameters::ChangeTone {
                tone: self
                    .tone
                    .as_deref()
                    .and_then(Tone::from_id)
                    .or_else(|| self.tone_name.as_deref().and_then(Tone::from_id)),
            },
            ActionKind::Generate => ActionParameters::Generate,
        };

        Ok(ActionRequest {
            text: self.text.clone(),
            parameters,
            origin: self.origin()?,
        })
    }

    /// Derive the origin from the flag fields.
    ///
    /// `isInputField` wins over `isRightClick`: a context-menu request inside
    /// an editable field is still written back into that field.
    pub fn origin(&self) -> Result<RequestOrigin, ProtocolError> {
        if !self.is_input_field {
            return Ok(RequestOrigin::PageSelection {
                position: self.position.clone(),
            });
        }
        if self.is_full_text {
            return Ok(RequestOrigin::whole_field());
        }
        match (self.text_start, self.text_end) {
            (Some(start), Some(end)) if start > end => {
                Err(ProtocolError::InvalidSpan { start, end })
            }
            (Some(start), Some(end)) => Ok(RequestOrigin::field_range(start, end)),
            _ => Ok(RequestOrigin::whole_field()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Outbound result, mirroring the identifying fields of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub action: String,

    pub result: String,

    pub original_text: String,

    #[serde(default)]
    pub used_fallback: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_name: Option<String>,

    #[serde(default)]
    pub is_right_click: bool,

    #[serde(default)]
    pub is_input_field: bool,

    #[serde(default)]
    pub is_full_text: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_start: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_end: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

impl ResultMessage {
    /// Build a reply from a result alone, deriving the origin flags.
    pub fn from_result(result: ActionResult) -> Self {
        let mut message = Self {
            action: result.action.as_str().to_string(),
            used_fallback: result.used_fallback,
            notice: result.notice,
            ..Default::default()
        };

        match result.origin {
            RequestOrigin::PageSelection { position } => {
                message.is_right_click = true;
                message.position = position;
            }
            RequestOrigin::EditableField { span } => {
                message.is_input_field = true;
                match span {
                    FieldSpan::WholeField => message.is_full_text = true,
                    FieldSpan::Range { start, end } => {
                        message.text_start = Some(start);
                        message.text_end = Some(end);
                    }
                }
            }
        }

        message.result = result.result_text;
        message.original_text = result.original_text;
        message
    }

    /// Build a reply that echoes the request's identifying fields verbatim.
    pub fn mirror(request: &RequestMessage, result: ActionResult) -> Self {
        let mut message = Self::from_result(result);
        message.id = request.id.clone();
        message.target_language = request.target_language.clone();
        message.language_name = request.language_name.clone();
        message.tone = request.tone.clone();
        message.tone_name = request.tone_name.clone();
        message.is_right_click = request.is_right_click;
        message
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }
}

/// Any reply sent back to a page-side host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyMessage {
    /// A usable result, possibly produced by the fallback.
    Result(ResultMessage),

    /// The request was not dispatched: malformed, or the action is disabled.
    Rejected {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
        reason: String,
    },
}

impl ReplyMessage {
    pub fn rejected(id: Option<String>, action: Option<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            id,
            action,
            reason: reason.into(),
        }
    }

    /// Correlation id of the request this reply answers.
    pub fn id(&self) -> Option<&str> {
        match self {
            ReplyMessage::Result(message) => message.id.as_deref(),
            ReplyMessage::Rejected { id, .. } => id.as_deref(),
        }
    }

    pub fn as_result(&self) -> Option<&ResultMessage> {
        match self {
            ReplyMessage::Result(message) => Some(message),
            ReplyMessage::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
