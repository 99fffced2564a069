use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence end pattern is valid"));

/// Extractive summary.
///
/// Two sentences or fewer are returned unchanged. Up to four sentences keep
/// the first two. Longer text keeps the first, middle and last sentence.
pub fn summarize(text: &str) -> String {
    let sentences: Vec<&str> = SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let picked: Vec<&str> = match sentences.len() {
        0..=2 => return text.to_string(),
        3 | 4 => sentences[..2].to_vec(),
        n => vec![sentences[0], sentences[n / 2], sentences[n - 1]],
    };

    format!("{}.", picked.join(". "))
}
