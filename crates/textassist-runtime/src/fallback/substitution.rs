//! Whole-word, case-insensitive substitution tables.

use regex::{Captures, Regex};

pub(crate) struct Substitutions {
    rules: Vec<(Regex, &'static str)>,
}

impl Substitutions {
    /// Build a table from `(phrase, replacement)` pairs.
    ///
    /// Spaces in a phrase match any run of whitespace, and an apostrophe
    /// matches both the ASCII and the typographic form.
    pub(crate) fn new(pairs: &[(&str, &'static str)]) -> Self {
        let rules = pairs
            .iter()
            .map(|(phrase, replacement)| (word_pattern(phrase), *replacement))
            .collect();
        Self { rules }
    }

    /// Apply each rule in order over the whole text.
    pub(crate) fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (pattern, replacement) in &self.rules {
            if pattern.is_match(&out) {
                out = pattern
                    .replace_all(&out, |caps: &Captures| match_case(&caps[0], replacement))
                    .into_owned();
            }
        }
        out
    }
}

fn word_pattern(phrase: &str) -> Regex {
    let body = phrase
        .split_whitespace()
        .map(|word| regex::escape(word).replace('\'', "['’]"))
        .collect::<Vec<_>>()
        .join(r"\s+");
    // Phrases are escaped literals, so the pattern always compiles.
    Regex::new(&format!(r"(?i)\b{body}\b")).expect("escaped phrase pattern is valid")
}

/// Carry the capitalisation of `found` over to `replacement`.
pub(crate) fn match_case(found: &str, replacement: &str) -> String {
    let letters: Vec<char> = found.chars().filter(|c| c.is_alphabetic()).collect();
    let all_upper = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if all_upper {
        return replacement.to_uppercase();
    }

    match found.chars().next() {
        Some(first) if first.is_uppercase() => capitalize_first(replacement),
        _ => replacement.to_string(),
    }
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
