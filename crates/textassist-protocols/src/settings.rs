//! User settings consulted by the router.
//!
//! Settings live in an external key-value store owned by the page-side
//! collaborators. The core only reads them.

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;

/// Per-action enable switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default = "enabled")]
    pub translate: bool,
    #[serde(default = "enabled")]
    pub proofread: bool,
    #[serde(default = "enabled")]
    pub rewrite: bool,
    #[serde(default = "enabled")]
    pub summarize: bool,
    #[serde(default = "enabled", alias = "change_tone")]
    pub change_tone: bool,
    #[serde(default = "enabled")]
    pub generate: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Features {
    fn default() -> Self {
        Self {
            translate: true,
            proofread: true,
            rewrite: true,
            summarize: true,
            change_tone: true,
            generate: true,
        }
    }
}

impl Features {
    pub fn is_enabled(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Translate => self.translate,
            ActionKind::Proofread => self.proofread,
            ActionKind::Rewrite => self.rewrite,
            ActionKind::Summarize => self.summarize,
            ActionKind::ChangeTone => self.change_tone,
            ActionKind::Generate => self.generate,
        }
    }

    /// Enabled actions in menu order.
    pub fn enabled_actions(&self) -> Vec<ActionKind> {
        ActionKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}

/// A translation target offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default, alias = "display_glyph")]
    pub display_glyph: String,
}

impl Language {
    pub fn new(code: &str, name: &str, glyph: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            display_glyph: glyph.to_string(),
        }
    }

    /// Language used when a translation target is missing or unknown.
    pub fn fallback() -> Self {
        Self::new("en", "English", "🇬🇧")
    }
}

/// Feature switches plus the user-ordered language list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub features: Features,
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            features: Features::default(),
            languages: default_languages(),
        }
    }
}

impl Settings {
    /// Find a configured language by code, ignoring case.
    pub fn language(&self, code: &str) -> Option<&Language> {
        let code = code.trim();
        self.languages
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code))
    }
}

/// Built-in language list, in the order shown to a new user.
pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en", "English", "🇬🇧"),
        Language::new("es", "Spanish", "🇪🇸"),
        Language::new("fr", "French", "🇫🇷"),
        Language::new("de", "German", "🇩🇪"),
        Language::new("it", "Italian", "🇮🇹"),
        Language::new("pt", "Portuguese", "🇵🇹"),
        Language::new("nl", "Dutch", "🇳🇱"),
        Language::new("ru", "Russian", "🇷🇺"),
        Language::new("ja", "Japanese", "🇯🇵"),
        Language::new("ko", "Korean", "🇰🇷"),
        Language::new("zh", "Chinese", "🇨🇳"),
        Language::new("hi", "Hindi", "🇮🇳"),
        Language::new("ar", "Arabic", "🇸🇦"),
    ]
}
