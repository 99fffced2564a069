//! Resolution of request parameters into concrete action settings.

use textassist_protocols::{
    ActionKind, ActionParameters, Language, RewriteStyle, Settings, SummaryLength, Tone,
};

/// An action with every optional parameter replaced by a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    Translate {
        target_code: String,
        target_name: String,
        source_code: String,
    },
    Proofread,
    Rewrite(RewriteStyle),
    Summarize(SummaryLength),
    ChangeTone(Tone),
    Generate,
}

impl ResolvedAction {
    /// Fill in defaults for missing or unrecognised parameters.
    ///
    /// Returns the resolved action together with a description of what was
    /// substituted, if anything. Substitution never fails the request.
    pub fn resolve(parameters: &ActionParameters) -> (Self, Option<String>) {
        match parameters {
            ActionParameters::Translate(params) => {
                let code = params.target_language_code.trim();
                if code.is_empty() {
                    let fallback = Language::fallback();
                    return (
                        Self::Translate {
                            target_code: fallback.code,
                            target_name: fallback.name,
                            source_code: params.source_language_code.clone(),
                        },
                        Some("missing target language, using English".to_string()),
                    );
                }

                let named = params
                    .target_language_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty());
                let (target, note) = match named {
                    Some(name) => (Language::new(code, name, ""), None),
                    None => match Settings::default().language(code) {
                        Some(language) => (language.clone(), None),
                        None => (
                            Language::fallback(),
                            Some(format!("unknown target language '{code}', using English")),
                        ),
                    },
                };

                (
                    Self::Translate {
                        target_code: target.code,
                        target_name: target.name,
                        source_code: params.source_language_code.clone(),
                    },
                    note,
                )
            }
            ActionParameters::Proofread => (Self::Proofread, None),
            ActionParameters::Rewrite { style } => match style {
                Some(style) => (Self::Rewrite(*style), None),
                None => (
                    Self::Rewrite(RewriteStyle::default()),
                    Some("unrecognised rewrite style, using improve".to_string()),
                ),
            },
            ActionParameters::Summarize { length } => match length {
                Some(length) => (Self::Summarize(*length), None),
                None => (
                    Self::Summarize(SummaryLength::default()),
                    Some("unrecognised summary length, using medium".to_string()),
                ),
            },
            ActionParameters::ChangeTone { tone } => match tone {
                Some(tone) => (Self::ChangeTone(*tone), None),
                None => (
                    Self::ChangeTone(Tone::DEFAULT),
                    Some("missing or unknown tone, using professional".to_string()),
                ),
            },
            ActionParameters::Generate => (Self::Generate, None),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Translate { .. } => ActionKind::Translate,
            Self::Proofread => ActionKind::Proofread,
            Self::Rewrite(_) => ActionKind::Rewrite,
            Self::Summarize(_) => ActionKind::Summarize,
            Self::ChangeTone(_) => ActionKind::ChangeTone,
            Self::Generate => ActionKind::Generate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textassist_protocols::TranslateParams;

    #[test]
    fn test_missing_tone_defaults_to_professional() {
        let (action, note) = ResolvedAction::resolve(&ActionParameters::ChangeTone { tone: None });
        assert_eq!(action, ResolvedAction::ChangeTone(Tone::Professional));
        assert!(note.is_some());
    }

    #[test]
    fn test_known_tone_kept() {
        let params = ActionParameters::ChangeTone {
            tone: Some(Tone::Friendly),
        };
        let (action, note) = ResolvedAction::resolve(&params);
        assert_eq!(action, ResolvedAction::ChangeTone(Tone::Friendly));
        assert!(note.is_none());
    }

    #[test]
    fn test_unknown_translate_target_defaults_to_english() {
        let params = ActionParameters::Translate(TranslateParams {
            target_language_code: "xx".to_string(),
            target_language_name: None,
            source_language_code: "auto".to_string(),
        });
        let (action, note) = ResolvedAction::resolve(&params);
        assert_eq!(
            action,
            ResolvedAction::Translate {
                target_code: "en".to_string(),
                target_name: "English".to_string(),
                source_code: "auto".to_string(),
            }
        );
        assert!(note.unwrap().contains("'xx'"));
    }

    #[test]
    fn test_named_custom_target_kept() {
        let params = ActionParameters::Translate(TranslateParams {
            target_language_code: "tlh".to_string(),
            target_language_name: Some("Klingon".to_string()),
            source_language_code: "auto".to_string(),
        });
        let (action, note) = ResolvedAction::resolve(&params);
        match action {
            ResolvedAction::Translate {
                target_code,
                target_name,
                ..
            } => {
                assert_eq!(target_code, "tlh");
                assert_eq!(target_name, "Klingon");
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert!(note.is_none());
    }

    #[test]
    fn test_empty_translate_target_defaults_to_english() {
        let params = ActionParameters::Translate(TranslateParams {
            target_language_code: "  ".to_string(),
            target_language_name: None,
            source_language_code: "auto".to_string(),
        });
        let (action, note) = ResolvedAction::resolve(&params);
        assert_eq!(
            action,
            ResolvedAction::Translate {
                target_code: "en".to_string(),
                target_name: "English".to_string(),
                source_code: "auto".to_string(),
            }
        );
        assert!(note.is_some());
    }

    #[test]
    fn test_translate_name_looked_up_from_catalogue() {
        let params = ActionParameters::Translate(TranslateParams {
            target_language_code: "ja".to_string(),
            target_language_name: None,
            source_language_code: "auto".to_string(),
        });
        let (action, note) = ResolvedAction::resolve(&params);
        match action {
            ResolvedAction::Translate { target_name, .. } => assert_eq!(target_name, "Japanese"),
            other => panic!("unexpected action {other:?}"),
        }
        assert!(note.is_none());
    }

    #[test]
    fn test_unrecognised_style_and_length() {
        let (action, _) = ResolvedAction::resolve(&ActionParameters::Rewrite { style: None });
        assert_eq!(action, ResolvedAction::Rewrite(RewriteStyle::Improve));
        let (action, _) = ResolvedAction::resolve(&ActionParameters::Summarize { length: None });
        assert_eq!(action, ResolvedAction::Summarize(SummaryLength::Medium));
        assert_eq!(action.kind(), ActionKind::Summarize);
    }
}
