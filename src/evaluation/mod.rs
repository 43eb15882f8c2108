// Evaluation: grading the scorer against the labeled corpus.

pub mod accuracy;
pub mod thresholds;
