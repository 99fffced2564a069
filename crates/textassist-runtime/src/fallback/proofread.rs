use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::substitution::Substitutions;

static MISSPELLINGS: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("teh", "the"),
        ("adn", "and"),
        ("recieve", "receive"),
        ("recieved", "received"),
        ("reciept", "receipt"),
        ("wich", "which"),
        ("occured", "occurred"),
        ("occurence", "occurrence"),
        ("seperate", "separate"),
        ("definately", "definitely"),
        ("untill", "until"),
        ("accomodate", "accommodate"),
        ("acheive", "achieve"),
        ("beleive", "believe"),
        ("wierd", "weird"),
        ("thier", "their"),
        ("alot", "a lot"),
        ("becuase", "because"),
        ("goverment", "government"),
        ("tommorow", "tomorrow"),
        ("tomorow", "tomorrow"),
        ("truely", "truly"),
        ("neccessary", "necessary"),
        ("occassion", "occasion"),
        ("begining", "beginning"),
        ("calender", "calendar"),
        ("enviroment", "environment"),
        ("existance", "existence"),
        ("independant", "independent"),
        ("publically", "publicly"),
        ("recomend", "recommend"),
        ("sucessful", "successful"),
        ("wont", "won't"),
        ("dont", "don't"),
        ("doesnt", "doesn't"),
        ("didnt", "didn't"),
        ("isnt", "isn't"),
        ("im", "I'm"),
        ("ive", "I've"),
        ("youre", "you're"),
        ("thats", "that's"),
        ("your welcome", "you're welcome"),
        ("there own", "their own"),
        ("could of", "could have"),
        ("should of", "should have"),
        ("would of", "would have"),
    ])
});

static LONE_I: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bi\b").expect("pronoun pattern is valid"));

static SENTENCE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[.!?]\s+)(\p{Ll})").expect("sentence start pattern is valid")
});

static REPEATED_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("space pattern is valid"));

/// Fix common misspellings, the pronoun "i" and sentence capitalisation.
///
/// Idempotent: no replacement produces text that another rule matches.
pub fn proofread(text: &str) -> String {
    let fixed = MISSPELLINGS.apply(text);
    let fixed = capitalize_pronoun(&fixed);
    let fixed = REPEATED_SPACE.replace_all(&fixed, " ");
    capitalize_sentences(&fixed)
}

/// Uppercase the first lowercase letter of every sentence.
pub(crate) fn capitalize_sentences(text: &str) -> String {
    SENTENCE_START
        .replace_all(text, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Uppercase a standalone "i", leaving abbreviations like "i.e." alone.
fn capitalize_pronoun(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in LONE_I.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let mut after = text[m.end()..].chars();
        let abbreviation = before == Some('.')
            || (after.next() == Some('.') && after.next().is_some_and(char::is_alphabetic));
        out.push_str(&text[last..m.start()]);
        if abbreviation {
            out.push('i');
        } else {
            out.push('I');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
