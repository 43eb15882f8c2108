// Accuracy sweep over candidate thresholds.
//
// Two phases:
//   1. score every document once (the only phase that touches text),
//   2. for each threshold, compare `score >= threshold` with the ground
//      truth label and count matches.
//
// Phase 2 is a pure reduction over the precomputed scores, so sweeping many
// thresholds costs O(documents × thresholds) comparisons and no rescoring.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{info, warn};

use crate::corpus::Document;
use crate::error::{BardError, Result};
use crate::scoring::overlap::OverlapScorer;
use crate::scoring::traits::TextScorer;
use crate::vocabulary::Vocabulary;

/// What to do with a document that has no qualifying words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Propagate `DegenerateDocument` and abort the evaluation
    #[default]
    Fail,
    /// Treat the document as scoring 0.0
    Zero,
    /// Leave the document out of every accuracy denominator
    Exclude,
}

impl FromStr for DegeneratePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "zero" => Ok(Self::Zero),
            "exclude" => Ok(Self::Exclude),
            other => Err(format!(
                "unknown degenerate policy {other:?} (expected fail, zero or exclude)"
            )),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fail => "fail",
            Self::Zero => "zero",
            Self::Exclude => "exclude",
        };
        f.write_str(name)
    }
}

/// Predicted label for a score at a threshold.
pub fn predict(score: f64, threshold: f64) -> bool {
    score >= threshold
}

/// A document reduced to what the sweep needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: String,
    pub is_shakespeare: bool,
    pub score: f64,
}

/// Output of phase 1: scores for every counted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredCorpus {
    pub documents: Vec<ScoredDocument>,
    /// Identifiers of documents dropped under `DegeneratePolicy::Exclude`
    pub excluded: Vec<String>,
}

/// Score each document exactly once.
///
/// Fails with `EmptyCorpus` when there is nothing to score, or when every
/// document was excluded as degenerate.
pub fn score_documents(
    documents: &[Document],
    scorer: &dyn TextScorer,
    policy: DegeneratePolicy,
) -> Result<ScoredCorpus> {
    if documents.is_empty() {
        return Err(BardError::EmptyCorpus);
    }

    let mut scored = ScoredCorpus::default();
    for doc in documents {
        let score = match scorer.score(doc) {
            Ok(score) => score,
            Err(BardError::DegenerateDocument { id }) => match policy {
                DegeneratePolicy::Fail => return Err(BardError::DegenerateDocument { id }),
                DegeneratePolicy::Zero => {
                    warn!(document = %id, "No qualifying words, scoring as 0.0");
                    0.0
                }
                DegeneratePolicy::Exclude => {
                    warn!(document = %id, "No qualifying words, excluding from accuracy");
                    scored.excluded.push(id);
                    continue;
                }
            },
            Err(e) => return Err(e),
        };

        scored.documents.push(ScoredDocument {
            id: doc.id(),
            is_shakespeare: doc.is_shakespeare,
            score,
        });
    }

    if scored.documents.is_empty() {
        return Err(BardError::EmptyCorpus);
    }

    info!(
        scorer = scorer.name(),
        scored = scored.documents.len(),
        excluded = scored.excluded.len(),
        "Scored corpus"
    );
    Ok(scored)
}

/// Confusion matrix for one threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    fn record(&mut self, actual: bool, predicted: bool) {
        match (actual, predicted) {
            (true, true) => self.true_positives += 1,
            (false, true) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_negatives += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    /// Documents predicted to be Shakespeare.
    pub fn predicted_positive(&self) -> usize {
        self.true_positives + self.false_positives
    }

    /// Fraction of documents classified correctly, `None` for an empty matrix.
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.correct() as f64 / total as f64),
        }
    }
}

/// Accuracy at a single threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdAccuracy {
    pub threshold: f64,
    pub accuracy: f64,
    pub counts: ConfusionCounts,
}

/// One entry per input threshold, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyReport {
    pub entries: Vec<ThresholdAccuracy>,
    /// Documents counted in every denominator
    pub documents: usize,
    /// Documents left out as degenerate
    pub excluded: usize,
}

impl AccuracyReport {
    pub fn thresholds(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.threshold).collect()
    }

    pub fn accuracies(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.accuracy).collect()
    }

    /// Highest-accuracy entry; the earliest one wins a tie.
    pub fn best(&self) -> Option<&ThresholdAccuracy> {
        self.entries.iter().reduce(|best, e| {
            if e.accuracy > best.accuracy {
                e
            } else {
                best
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Phase 2: accuracy of each threshold over already-scored documents.
pub fn sweep(thresholds: &[f64], scored: &ScoredCorpus) -> Result<AccuracyReport> {
    if scored.documents.is_empty() {
        return Err(BardError::EmptyCorpus);
    }

    let mut entries = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let mut counts = ConfusionCounts::default();
        for doc in &scored.documents {
            counts.record(doc.is_shakespeare, predict(doc.score, threshold));
        }
        let accuracy = counts.accuracy().ok_or(BardError::EmptyCorpus)?;
        entries.push(ThresholdAccuracy {
            threshold,
            accuracy,
            counts,
        });
    }

    Ok(AccuracyReport {
        entries,
        documents: scored.documents.len(),
        excluded: scored.excluded.len(),
    })
}

/// Score the documents with any scorer, then sweep the thresholds.
pub fn evaluate_with(
    thresholds: &[f64],
    documents: &[Document],
    scorer: &dyn TextScorer,
    policy: DegeneratePolicy,
) -> Result<AccuracyReport> {
    let scored = score_documents(documents, scorer, policy)?;
    sweep(thresholds, &scored)
}

/// Accuracy of the unique-word overlap score against `vocabulary`.
pub fn evaluate(
    thresholds: &[f64],
    documents: &[Document],
    vocabulary: &Vocabulary,
    policy: DegeneratePolicy,
) -> Result<AccuracyReport> {
    evaluate_with(thresholds, documents, &OverlapScorer::new(vocabulary), policy)
}
