// Error kinds surfaced by the scoring core.
//
// The CLI wraps these in anyhow with extra context; library callers can
// match on the variants directly.

use std::io;
use std::path::PathBuf;

/// Errors produced while loading, scoring, or evaluating documents.
#[derive(thiserror::Error, Debug)]
pub enum BardError {
    /// A vocabulary or corpus file could not be opened or read.
    #[error("cannot read {}: {}", .path.display(), .source)]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document has no qualifying tokens, so its score is undefined.
    #[error("document {id} has no qualifying words to score")]
    DegenerateDocument { id: String },

    /// Accuracy was requested over zero documents.
    #[error("cannot compute accuracy over an empty corpus")]
    EmptyCorpus,

    /// A threshold value could not be parsed or was not finite.
    #[error("invalid threshold {0:?}")]
    InvalidThreshold(String),
}

impl BardError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BardError>;
