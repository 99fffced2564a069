//! Action-specific parameters.
//!
//! Optional enum fields use `None` for "supplied but not recognised". The
//! engine substitutes the documented default for those instead of failing
//! the request.

use serde::{Deserialize, Serialize};

use super::ActionKind;

/// Target tone for [`ActionKind::ChangeTone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Straightforward,
    Confident,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Straightforward,
        Tone::Confident,
        Tone::Friendly,
    ];

    /// Tone used when the caller supplied none or an unknown id.
    pub const DEFAULT: Tone = Tone::Professional;

    pub fn id(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Straightforward => "straightforward",
            Tone::Confident => "confident",
            Tone::Friendly => "friendly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Straightforward => "Straightforward",
            Tone::Confident => "Confident",
            Tone::Friendly => "Friendly",
        }
    }

    /// Look up a tone by id, ignoring case and surrounding whitespace.
    pub fn from_id(id: &str) -> Option<Tone> {
        let id = id.trim();
        Self::ALL.into_iter().find(|t| t.id().eq_ignore_ascii_case(id))
    }
}

/// Rewrite flavour for [`ActionKind::Rewrite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteStyle {
    Formal,
    Casual,
    Concise,
    #[default]
    Improve,
}

impl RewriteStyle {
    pub fn from_id(id: &str) -> Option<RewriteStyle> {
        match id.trim().to_ascii_lowercase().as_str() {
            "formal" => Some(RewriteStyle::Formal),
            "casual" => Some(RewriteStyle::Casual),
            "concise" => Some(RewriteStyle::Concise),
            "improve" => Some(RewriteStyle::Improve),
            _ => None,
        }
    }
}

/// Summary length for [`ActionKind::Summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn from_id(id: &str) -> Option<SummaryLength> {
        match id.trim().to_ascii_lowercase().as_str() {
            "short" => Some(SummaryLength::Short),
            "medium" => Some(SummaryLength::Medium),
            "long" => Some(SummaryLength::Long),
            _ => None,
        }
    }
}

/// Parameters of a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Target language code, e.g. `"es"`.
    pub target_language_code: String,

    /// Human-readable target language name, e.g. `"Spanish"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language_name: Option<String>,

    /// Source language code, `"auto"` for detection.
    #[serde(default = "default_source_language")]
    pub source_language_code: String,
}

impl TranslateParams {
    pub fn new(target_code: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            target_language_code: target_code.into(),
            target_language_name: Some(target_name.into()),
            source_language_code: default_source_language(),
        }
    }

    pub fn with_source(mut self, source_code: impl Into<String>) -> Self {
        self.source_language_code = source_code.into();
        self
    }
}

fn default_source_language() -> String {
    "auto".to_string()
}

/// Action together with its action-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionParameters {
    Translate(TranslateParams),
    Proofread,
    Rewrite {
        #[serde(default)]
        style: Option<RewriteStyle>,
    },
    Summarize {
        #[serde(default)]
        length: Option<SummaryLength>,
    },
    ChangeTone {
        #[serde(default)]
        tone: Option<Tone>,
    },
    Generate,
}

impl ActionParameters {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionParameters::Translate(_) => ActionKind::Translate,
            ActionParameters::Proofread => ActionKind::Proofread,
            ActionParameters::Rewrite { .. } => ActionKind::Rewrite,
            ActionParameters::Summarize { .. } => ActionKind::Summarize,
            ActionParameters::ChangeTone { .. } => ActionKind::ChangeTone,
            ActionParameters::Generate => ActionKind::Generate,
        }
    }
}
