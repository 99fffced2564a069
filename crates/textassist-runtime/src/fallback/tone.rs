use once_cell::sync::Lazy;
use regex::Regex;

use textassist_protocols::Tone;

use super::proofread::capitalize_sentences;
use super::rewrite::{CONTRACTIONS, FILLERS};
use super::substitution::Substitutions;

static PROFESSIONAL: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("hey", "hello"),
        ("hi", "hello"),
        ("thanks", "thank you"),
        ("thx", "thank you"),
        ("kind of", "somewhat"),
        ("sort of", "somewhat"),
        ("a bit", "slightly"),
        ("maybe", "perhaps"),
        ("I think", "I believe"),
        ("ASAP", "as soon as possible"),
    ])
});

static CASUAL: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("do not", "don't"),
        ("cannot", "can't"),
        ("will not", "won't"),
        ("does not", "doesn't"),
        ("did not", "didn't"),
        ("is not", "isn't"),
        ("are not", "aren't"),
        ("I am", "I'm"),
        ("it is", "it's"),
        ("you are", "you're"),
        ("we are", "we're"),
        ("they are", "they're"),
        ("hello", "hey"),
        ("thank you", "thanks"),
        ("however", "but"),
        ("therefore", "so"),
    ])
});

static CONFIDENT: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("I think", "I know"),
        ("I believe", "I am confident"),
        ("I guess", "I am sure"),
        ("I feel like", "I am sure"),
        ("might", "will"),
        ("could", "can"),
        ("maybe", "certainly"),
        ("perhaps", "certainly"),
        ("possibly", "certainly"),
        ("probably", "certainly"),
    ])
});

static FRIENDLY: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("dear", "hi"),
        ("greetings", "hi"),
        ("hello", "hi there"),
        ("best regards", "cheers"),
        ("kind regards", "cheers"),
        ("regards", "cheers"),
        ("sincerely", "cheers"),
        ("thank you", "thanks so much"),
    ])
});

static HEDGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:I think|I feel like|in my opinion|perhaps|maybe|possibly|kind of|sort of|basically|just|really|actually)\b,?\s*",
    )
    .expect("hedge pattern is valid")
});

static EXCLAMATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!+").expect("exclamation pattern is valid"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([,.!?;:])").expect("punctuation pattern is valid"));

static REPEATED_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("space pattern is valid"));

const FRIENDLY_EMOJI: &str = "😊";

/// Restyle `text` towards `tone` with word tables.
pub fn change_tone(text: &str, tone: Tone) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    match tone {
        Tone::Professional => {
            let out = PROFESSIONAL.apply(&FILLERS.apply(&CONTRACTIONS.apply(text)));
            EXCLAMATION.replace_all(&out, ".").into_owned()
        }
        Tone::Casual => CASUAL.apply(text),
        Tone::Straightforward => straightforward(text),
        Tone::Confident => CONFIDENT.apply(text),
        Tone::Friendly => {
            let out = FRIENDLY.apply(text);
            if contains_emoji(&out) {
                out
            } else {
                format!("{} {FRIENDLY_EMOJI}", out.trim_end())
            }
        }
    }
}

fn straightforward(text: &str) -> String {
    let out = HEDGES.replace_all(text, "");
    let out = SPACE_BEFORE_PUNCT.replace_all(&out, "$1");
    let out = REPEATED_SPACE.replace_all(&out, " ");
    let out = capitalize_sentences(out.trim());
    if out.is_empty() {
        // Everything was a hedge; keep the user's words.
        text.to_string()
    } else {
        out
    }
}

fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c as u32, 0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x1F000..=0x1F2FF)
    })
}
