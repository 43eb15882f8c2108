// Labeled corpus: documents, their ground truth, and how they are found.

pub mod discovery;
pub mod label;

use std::path::PathBuf;

/// A text fragment with its identity and ground-truth label.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Source path (or any name following the corpus naming convention)
    pub path: PathBuf,
    /// Full raw text content
    pub text: String,
    /// Whether the naming convention marks this as a Shakespeare fragment
    pub is_shakespeare: bool,
}

impl Document {
    /// Build a document, resolving its label from the path.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let is_shakespeare = label::is_shakespeare(&path);
        Self {
            path,
            text: text.into(),
            is_shakespeare,
        }
    }

    /// Display form of the identifier, used in logs and errors.
    pub fn id(&self) -> String {
        self.path.display().to_string()
    }
}
