// Word tokenizer for the overlap scorer.
//
// Splits on whitespace, lower-cases, trims surrounding punctuation and keeps
// only purely alphabetic words. Hyphenated compounds, contractions and
// numerals are dropped on purpose: they never match a plain word list.

use std::collections::HashSet;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters trimmed from both ends of every whitespace-separated fragment.
pub const STRIP_CHARS: &[char] = &[
    ' ', ',', ';', '.', ':', '\'', '"', '[', ']', '(', ')', '-', '_', '?', '!',
];

/// True for characters in the Unicode letter categories (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`, which also admits letter numbers
/// like `ⅻ` and combining vowel signs.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Normalize a single whitespace-separated fragment.
///
/// Returns `None` when nothing alphabetic survives the trim.
pub fn normalize_word(fragment: &str) -> Option<String> {
    let lower = fragment.to_lowercase();
    let clean = lower.trim_matches(STRIP_CHARS);
    if !clean.is_empty() && clean.chars().all(is_letter) {
        Some(clean.to_string())
    } else {
        None
    }
}

/// Lazily yield the normalized words of `text`, in order.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(normalize_word)
}

/// Materialized form of [`tokens`].
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).collect()
}

/// The distinct normalized words of `text`.
pub fn unique_tokens(text: &str) -> HashSet<String> {
    tokens(text).collect()
}
