//! Prompt templates sent to the model session.

use textassist_protocols::{RewriteStyle, SummaryLength, Tone};

use crate::action::ResolvedAction;

/// Build the user prompt for `action` over `text`.
pub fn build(action: &ResolvedAction, text: &str) -> String {
    match action {
        ResolvedAction::Translate {
            target_name,
            source_code,
            ..
        } => {
            let from = if source_code.is_empty() || source_code.eq_ignore_ascii_case("auto") {
                String::new()
            } else {
                format!(" from the language with code \"{source_code}\"")
            };
            format!(
                "Translate the following text{from} to {target_name}. Return only the translation, with no explanations or notes.\n\nText:\n{text}"
            )
        }
        ResolvedAction::Proofread => format!(
            "Correct the grammar, spelling and punctuation of the following text. Keep its meaning and wording where possible. Return only the corrected text.\n\nText:\n{text}"
        ),
        ResolvedAction::Rewrite(style) => format!(
            "{} Return only the rewritten text.\n\nText:\n{text}",
            rewrite_instruction(*style)
        ),
        ResolvedAction::Summarize(length) => format!(
            "{} Return only the summary.\n\nText:\n{text}",
            summary_instruction(*length)
        ),
        ResolvedAction::ChangeTone(tone) => format!(
            "Rewrite the following text in a {} tone. {} Keep the original meaning. Reply with plain text only: no markdown, no bullet points and no bold text.\n\nText:\n{text}",
            tone.id(),
            tone_guidance(*tone)
        ),
        ResolvedAction::Generate => format!(
            "Write content for the following request. Return only the content itself.\n\nRequest:\n{text}"
        ),
    }
}

fn rewrite_instruction(style: RewriteStyle) -> &'static str {
    match style {
        RewriteStyle::Formal => "Rewrite the following text in a formal register.",
        RewriteStyle::Casual => "Rewrite the following text in a casual, conversational register.",
        RewriteStyle::Concise => {
            "Rewrite the following text to be as concise as possible without losing meaning."
        }
        RewriteStyle::Improve => "Improve the following text for clarity and readability.",
    }
}

fn summary_instruction(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Short => "Summarize the following text in one or two sentences.",
        SummaryLength::Medium => "Summarize the following text in three or four sentences.",
        SummaryLength::Long => "Write a detailed summary of the following text in a few paragraphs.",
    }
}

fn tone_guidance(tone: Tone) -> &'static str {
    match tone {
        Tone::Professional => "Use polished, businesslike language without slang.",
        Tone::Casual => "Use relaxed everyday language and contractions.",
        Tone::Straightforward => "Remove hedging and filler and state things directly.",
        Tone::Confident => "Use assertive language and avoid uncertain phrasing.",
        Tone::Friendly => "Use warm, approachable language.",
    }
}

/// Normalise a model reply before it is returned to the user.
///
/// Strips surrounding whitespace and code fences. Tone changes additionally
/// lose markdown emphasis, since the result replaces plain text in place.
pub fn clean_reply(action: &ResolvedAction, reply: &str) -> String {
    let mut text = reply.trim();

    if let Some(inner) = text.strip_prefix("```") {
        // Drop an optional language tag on the opening fence.
        let inner = inner.split_once('\n').map_or("", |(_, rest)| rest);
        text = inner.strip_suffix("```").unwrap_or(inner).trim();
    }

    match action {
        ResolvedAction::ChangeTone(_) => text
            .replace("**", "")
            .lines()
            .map(|line| line.trim_start_matches(['-', '*', '•']).trim_start())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(source: &str) -> ResolvedAction {
        ResolvedAction::Translate {
            target_code: "es".to_string(),
            target_name: "Spanish".to_string(),
            source_code: source.to_string(),
        }
    }

    #[test]
    fn test_translate_prompt() {
        let prompt = build(&translate("auto"), "Hello");
        assert!(prompt.contains("to Spanish"));
        assert!(prompt.ends_with("Hello"));
        assert!(!prompt.contains("from the language"));

        let prompt = build(&translate("de"), "Hallo");
        assert!(prompt.contains("\"de\""));
    }

    #[test]
    fn test_every_action_includes_text() {
        let actions = [
            translate("auto"),
            ResolvedAction::Proofread,
            ResolvedAction::Rewrite(RewriteStyle::Concise),
            ResolvedAction::Summarize(SummaryLength::Long),
            ResolvedAction::ChangeTone(Tone::Friendly),
            ResolvedAction::Generate,
        ];
        for action in actions {
            assert!(build(&action, "needle text").contains("needle text"));
        }
    }

    #[test]
    fn test_tone_prompt_forbids_markdown() {
        let prompt = build(&ResolvedAction::ChangeTone(Tone::Confident), "x");
        assert!(prompt.contains("confident tone"));
        assert!(prompt.contains("no markdown"));
    }

    #[test]
    fn test_clean_reply_strips_fences() {
        let reply = "```text\nHola mundo\n```";
        assert_eq!(clean_reply(&translate("auto"), reply), "Hola mundo");
        assert_eq!(clean_reply(&ResolvedAction::Proofread, "  fine \n"), "fine");
    }

    #[test]
    fn test_clean_reply_tone_drops_markdown() {
        let reply = "- **Hello** there\n* friend";
        assert_eq!(
            clean_reply(&ResolvedAction::ChangeTone(Tone::Casual), reply),
            "Hello there\nfriend"
        );
    }
}
