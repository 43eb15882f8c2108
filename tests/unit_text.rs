// Unit tests for tokenization, vocabulary loading and the overlap score.
//
// Tests isolated pure functions: tokenizer normalization rules, Vocabulary
// construction, and the score invariants (range, uniqueness, empty and
// identical vocabularies).

use std::io::Write;

use proptest::prelude::*;

use bardscore::scoring::overlap::{score, ScoreBreakdown};
use bardscore::text::tokenizer::{tokenize, unique_tokens};
use bardscore::vocabulary::Vocabulary;
use bardscore::BardError;

fn vocab(words: &[&str]) -> Vocabulary {
    words.iter().copied().collect()
}

// ============================================================
// Tokenizer
// ============================================================

#[test]
fn tokenizer_handles_mixed_whitespace() {
    assert_eq!(
        tokenize("To be,\tor not\nto   be:"),
        vec!["to", "be", "or", "not", "to", "be"]
    );
}

#[test]
fn tokenizer_strips_brackets_and_quotes() {
    assert_eq!(tokenize("'Tis [Exit] (aside) \"Fie!\""), vec!["tis", "exit", "aside", "fie"]);
}

#[test]
fn tokenizer_drops_contractions_and_compounds() {
    assert!(tokenize("ne'er-do-well o'clock").is_empty());
}

#[test]
fn tokenizer_drops_alphanumeric_mixes() {
    assert_eq!(tokenize("act3 scene ii 2b"), vec!["scene", "ii"]);
}

#[test]
fn tokenizer_drops_roman_numeral_characters() {
    assert_eq!(tokenize("Act ⅻ scene"), vec!["act", "scene"]);
    assert_eq!(unique_tokens("Act ⅻ scene").len(), 2);
}

#[test]
fn tokenizer_keeps_order_and_duplicates() {
    assert_eq!(tokenize("b a b"), vec!["b", "a", "b"]);
    assert_eq!(unique_tokens("b a b").len(), 2);
}

// ============================================================
// Vocabulary
// ============================================================

#[test]
fn vocabulary_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "thou").unwrap();
    writeln!(file, "doth").unwrap();
    writeln!(file, "thou").unwrap();

    let vocabulary = Vocabulary::load(file.path()).unwrap();
    assert_eq!(vocabulary.len(), 2);
    assert!(vocabulary.contains("thou"));
}

#[test]
fn vocabulary_empty_file_is_valid() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let vocabulary = Vocabulary::load(file.path()).unwrap();
    assert!(vocabulary.is_empty());
}

#[test]
fn vocabulary_without_trailing_newline() {
    let vocabulary = Vocabulary::from_reader("thou\ndoth".as_bytes()).unwrap();
    assert!(vocabulary.contains("doth"));
}

#[test]
fn vocabulary_entries_match_tokens_regardless_of_case_and_padding() {
    let vocabulary = Vocabulary::from_reader("Thou\ndoth \n".as_bytes()).unwrap();
    assert!(vocabulary.contains("thou"));
    assert!(vocabulary.contains("doth"));
    assert_eq!(score("thou doth", &vocabulary).unwrap(), 1.0);
}

#[test]
fn vocabulary_missing_file_names_the_path() {
    let err = Vocabulary::load("/nonexistent/words.txt").unwrap_err();
    match err {
        BardError::SourceUnreadable { path, .. } => {
            assert_eq!(path.to_str(), Some("/nonexistent/words.txt"))
        }
        other => panic!("Expected SourceUnreadable, got {other:?}"),
    }
}

// ============================================================
// Overlap score
// ============================================================

#[test]
fn score_reference_example_full_match() {
    assert_eq!(score("Thou doth! Thou.", &vocab(&["thou", "doth"])).unwrap(), 1.0);
}

#[test]
fn score_reference_example_no_match() {
    assert_eq!(score("hello world", &vocab(&["thou"])).unwrap(), 0.0);
}

#[test]
fn score_denominator_ignores_letter_numbers() {
    // unique: {act, scene}; "ⅻ" is not a word
    assert_eq!(score("Act ⅻ scene", &vocab(&["act"])).unwrap(), 0.5);
}

#[test]
fn score_with_empty_vocabulary_is_zero() {
    assert_eq!(score("wherefore art thou", &Vocabulary::default()).unwrap(), 0.0);
}

#[test]
fn score_ignores_vocabulary_words_absent_from_text() {
    let v = vocab(&["thou", "doth", "hath", "wherefore"]);
    assert_eq!(score("thou", &v).unwrap(), 1.0);
}

#[test]
fn score_of_empty_text_is_degenerate() {
    assert!(matches!(
        score("", &vocab(&["thou"])),
        Err(BardError::DegenerateDocument { .. })
    ));
}

#[test]
fn breakdown_of_degenerate_text_has_no_score() {
    let b = ScoreBreakdown::compute("123 456", &vocab(&["thou"]));
    assert_eq!(b.unique_words, 0);
    assert_eq!(b.score(), None);
}

// ============================================================
// Properties
// ============================================================

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9,.;'!? -]{0,12}", 0..30).prop_map(|parts| parts.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokenize_is_deterministic(text in arb_text()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    #[test]
    fn tokens_are_lowercase_alphabetic(text in arb_text()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()));
        }
    }

    #[test]
    fn score_is_within_unit_interval(
        text in arb_text(),
        words in prop::collection::vec(arb_word(), 0..20),
    ) {
        let v: Vocabulary = words.into_iter().collect();
        if let Ok(s) = score(&text, &v) {
            prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }
    }

    #[test]
    fn repeating_words_does_not_change_score(
        words in prop::collection::vec(arb_word(), 1..15),
        vocab_words in prop::collection::vec(arb_word(), 0..15),
    ) {
        let v: Vocabulary = vocab_words.into_iter().collect();
        let once = words.join(" ");
        let twice = format!("{once} {once}");
        prop_assert_eq!(score(&once, &v).unwrap(), score(&twice, &v).unwrap());
    }

    #[test]
    fn text_equal_to_vocabulary_scores_one(words in prop::collection::vec(arb_word(), 1..15)) {
        let v: Vocabulary = words.iter().cloned().collect();
        prop_assert_eq!(score(&words.join(" "), &v).unwrap(), 1.0);
    }
}
