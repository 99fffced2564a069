use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:e-?mail|letter|message|reply)\b").expect("email pattern is valid")
});

static LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:list|steps|ideas|tips|checklist)\b").expect("list pattern is valid")
});

static OUTLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:summary|overview|report|outline|plan)\b")
        .expect("outline pattern is valid")
});

const TOPIC_LIMIT: usize = 80;

const NOTE: &str =
    "(This is a template. Full text generation requires the on-device language model.)";

/// Produce a keyword-selected template around the user's prompt.
pub fn generate(prompt: &str) -> String {
    let topic = topic(prompt);

    if EMAIL.is_match(prompt) {
        format!(
            "Subject: {topic}\n\nHi [Name],\n\nI hope you are doing well. I am writing about {topic}.\n\n[Add the details you want to share here.]\n\nBest regards,\n[Your name]\n\n{NOTE}"
        )
    } else if LIST.is_match(prompt) {
        format!("{topic}:\n\n1. [First point]\n2. [Second point]\n3. [Third point]\n\n{NOTE}")
    } else if OUTLINE.is_match(prompt) {
        format!(
            "{topic}\n\nBackground: [Context]\nKey points: [Main findings]\nNext steps: [Actions]\n\n{NOTE}"
        )
    } else {
        format!("{topic}\n\n[Write your content here.]\n\n{NOTE}")
    }
}

/// First non-blank line of the prompt, shortened for use as a heading.
fn topic(prompt: &str) -> String {
    let line = prompt
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .trim_end_matches(['.', '!', '?', ':']);

    if line.is_empty() {
        return "Your topic".to_string();
    }
    if line.chars().count() <= TOPIC_LIMIT {
        return line.to_string();
    }
    let shortened: String = line.chars().take(TOPIC_LIMIT).collect();
    format!("{}...", shortened.trim_end())
}
