use once_cell::sync::Lazy;

use super::substitution::Substitutions;

/// Contractions expanded to their long forms. `it's` and `that's` are left
/// alone because they are ambiguous between "is" and "has".
pub(crate) static CONTRACTIONS: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("can't", "cannot"),
        ("won't", "will not"),
        ("don't", "do not"),
        ("doesn't", "does not"),
        ("didn't", "did not"),
        ("isn't", "is not"),
        ("aren't", "are not"),
        ("wasn't", "was not"),
        ("weren't", "were not"),
        ("haven't", "have not"),
        ("hasn't", "has not"),
        ("hadn't", "had not"),
        ("couldn't", "could not"),
        ("shouldn't", "should not"),
        ("wouldn't", "would not"),
        ("I'm", "I am"),
        ("I've", "I have"),
        ("I'll", "I will"),
        ("you're", "you are"),
        ("we're", "we are"),
        ("they're", "they are"),
        ("let's", "let us"),
    ])
});

pub(crate) static FILLERS: Lazy<Substitutions> = Lazy::new(|| {
    Substitutions::new(&[
        ("gonna", "going to"),
        ("wanna", "want to"),
        ("gotta", "have to"),
        ("kinda", "somewhat"),
        ("sorta", "somewhat"),
        ("yeah", "yes"),
        ("nope", "no"),
        ("dunno", "do not know"),
    ])
});

/// Expand contractions and replace informal fillers.
pub fn rewrite(text: &str) -> String {
    FILLERS.apply(&CONTRACTIONS.apply(text))
}
