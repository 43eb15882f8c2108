// Scorer trait: swap-ready abstraction over the scoring heuristic.
//
// The evaluator only needs "document in, score out", so any heuristic that
// produces a value in [0.0, 1.0] can be swept over the same thresholds.

use crate::corpus::Document;
use crate::error::Result;

/// Trait for scoring a document's resemblance to the target author.
pub trait TextScorer {
    /// Score one document. Scores are in [0.0, 1.0].
    ///
    /// Fails with `DegenerateDocument` when the document has nothing to score.
    fn score(&self, document: &Document) -> Result<f64>;

    /// Human-readable scorer name for logs and reports.
    fn name(&self) -> &str;
}
