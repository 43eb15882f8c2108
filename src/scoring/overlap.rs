// Unique-word overlap score.
//
// The score of a text is the fraction of its distinct words that appear in
// the reference vocabulary:
//
//   |unique(tokens) ∩ vocabulary| / |unique(tokens)|
//
// Each distinct word costs one hash lookup, so scoring is linear in the
// number of tokens. Repeated words carry no extra weight.

use serde::Serialize;
use tracing::debug;

use super::traits::TextScorer;
use crate::corpus::Document;
use crate::error::{BardError, Result};
use crate::text::tokenizer;
use crate::vocabulary::Vocabulary;

/// Identifier used in errors when scoring text that has no document behind it.
const INLINE_TEXT_ID: &str = "<inline text>";

/// Counts behind an overlap score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Distinct qualifying words in the text
    pub unique_words: usize,
    /// How many of those are in the vocabulary
    pub matched_words: usize,
}

impl ScoreBreakdown {
    /// Count unique and matched words of `text`.
    pub fn compute(text: &str, vocabulary: &Vocabulary) -> Self {
        let unique = tokenizer::unique_tokens(text);
        let matched_words = unique.iter().filter(|w| vocabulary.contains(w)).count();
        Self {
            unique_words: unique.len(),
            matched_words,
        }
    }

    /// The overlap ratio, or `None` when the text had no qualifying words.
    pub fn score(&self) -> Option<f64> {
        if self.unique_words == 0 {
            None
        } else {
            Some(self.matched_words as f64 / self.unique_words as f64)
        }
    }
}

/// Score raw text against a vocabulary.
pub fn score(text: &str, vocabulary: &Vocabulary) -> Result<f64> {
    ScoreBreakdown::compute(text, vocabulary)
        .score()
        .ok_or_else(|| BardError::DegenerateDocument {
            id: INLINE_TEXT_ID.to_string(),
        })
}

/// Overlap scorer bound to a loaded vocabulary.
pub struct OverlapScorer<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> OverlapScorer<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn breakdown(&self, text: &str) -> ScoreBreakdown {
        ScoreBreakdown::compute(text, self.vocabulary)
    }
}

impl TextScorer for OverlapScorer<'_> {
    fn score(&self, document: &Document) -> Result<f64> {
        let breakdown = self.breakdown(&document.text);
        let score = breakdown
            .score()
            .ok_or_else(|| BardError::DegenerateDocument {
                id: document.id(),
            })?;

        debug!(
            document = %document.id(),
            unique = breakdown.unique_words,
            matched = breakdown.matched_words,
            score,
            "Scored document"
        );
        Ok(score)
    }

    fn name(&self) -> &str {
        "unique-word overlap"
    }
}
