// Scoring: how Shakespearean a single text looks.

pub mod overlap;
pub mod traits;
