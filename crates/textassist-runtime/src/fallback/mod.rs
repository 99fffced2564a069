//! Deterministic rule-based transformations.
//!
//! Used when the model is absent, fails or is too slow. Every function here
//! is pure and total: it accepts any string, including the empty one, and
//! never fails.
//!
//! The word tables are approximations. Substitutions are whole-word and
//! case-insensitive, and some entries are ambiguous by construction (for
//! example `there own` is always read as `their own`).

mod generate;
mod proofread;
mod rewrite;
mod substitution;
mod summarize;
mod tone;

pub use generate::generate;
pub use proofread::proofread;
pub use rewrite::rewrite;
pub use summarize::summarize;
pub use tone::change_tone;

use textassist_protocols::ActionKind;

use crate::action::ResolvedAction;

/// Translation without a model is the identity. The caller attaches a
/// notice so the user knows nothing was translated.
pub fn translate(text: &str) -> String {
    text.to_string()
}

/// Apply the fallback rule for `action`.
pub fn apply(action: &ResolvedAction, text: &str) -> String {
    match action {
        ResolvedAction::Translate { .. } => translate(text),
        ResolvedAction::Proofread => proofread(text),
        ResolvedAction::Rewrite(_) => rewrite(text),
        ResolvedAction::Summarize(_) => summarize(text),
        ResolvedAction::ChangeTone(tone) => change_tone(text, *tone),
        ResolvedAction::Generate => generate(text),
    }
}

/// User-facing message attached to a fallback result.
pub fn notice(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Translate => "Translation is unavailable right now. Please try again.",
        ActionKind::Generate => {
            "Showing a template. Full text generation needs the on-device language model."
        }
        _ => "The on-device language model is unavailable, so basic offline rules were applied.",
    }
}
