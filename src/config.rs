use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::corpus::discovery::DEFAULT_EXTENSION;
use crate::evaluation::accuracy::DegeneratePolicy;

/// Default reference word list, relative to the working directory.
pub const DEFAULT_VOCABULARY_PATH: &str = "shakespeare-words.txt";
/// Default labeled corpus directory.
pub const DEFAULT_CORPUS_DIR: &str = "test-set";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags take
/// precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Word list, one word per line (BARDSCORE_VOCABULARY)
    pub vocabulary_path: PathBuf,
    /// Flat directory of labeled fragments (BARDSCORE_CORPUS_DIR)
    pub corpus_dir: PathBuf,
    /// File extension of corpus documents, without the dot (BARDSCORE_EXTENSION)
    pub extension: String,
    /// Handling of documents with no qualifying words (BARDSCORE_DEGENERATE)
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from(DEFAULT_VOCABULARY_PATH),
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; only a malformed BARDSCORE_DEGENERATE
    /// is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let degenerate_policy = match env::var("BARDSCORE_DEGENERATE") {
            Ok(raw) => raw
                .parse::<DegeneratePolicy>()
                .map_err(|e: String| anyhow::anyhow!("BARDSCORE_DEGENERATE: {e}"))?,
            Err(_) => defaults.degenerate_policy,
        };

        Ok(Self {
            vocabulary_path: env::var("BARDSCORE_VOCABULARY")
                .map(PathBuf::from)
                .unwrap_or(defaults.vocabulary_path),
            corpus_dir: env::var("BARDSCORE_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_dir),
            extension: env::var("BARDSCORE_EXTENSION")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.extension),
            degenerate_policy,
        })
    }

    /// Check that the vocabulary file exists.
    /// Call this before any operation that scores text.
    pub fn require_vocabulary(&self) -> Result<()> {
        if !self.vocabulary_path.is_file() {
            anyhow::bail!(
                "Vocabulary file not found: {}\n\
                 Pass --vocabulary <FILE> or set BARDSCORE_VOCABULARY in your .env file.",
                self.vocabulary_path.display()
            );
        }
        Ok(())
    }

    /// Check that the corpus directory exists.
    /// Call this before running an evaluation.
    pub fn require_corpus(&self) -> Result<()> {
        if !self.corpus_dir.is_dir() {
            anyhow::bail!(
                "Corpus directory not found: {}\n\
                 Pass --corpus <DIR> or set BARDSCORE_CORPUS_DIR in your .env file.",
                self.corpus_dir.display()
            );
        }
        Ok(())
    }
}
