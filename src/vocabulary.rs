// Reference vocabulary: the word list a text is scored against.
//
// Loaded once per run and shared by reference. Backed by a HashSet so each
// membership test is O(1) expected, which keeps scoring linear in the
// number of tokens.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{BardError, Result};
use crate::text::tokenizer;

/// An immutable set of reference words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Load a vocabulary file with one word per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| BardError::unreadable(path, e))?;
        let vocabulary =
            Self::from_reader(BufReader::new(file)).map_err(|e| BardError::unreadable(path, e))?;

        info!(
            path = %path.display(),
            words = vocabulary.len(),
            "Loaded vocabulary"
        );
        Ok(vocabulary)
    }

    /// Read one word per line from any buffered reader.
    ///
    /// Each line is normalized the same way text is tokenized, so it can
    /// match scored words. Lines that normalize to nothing (blank lines,
    /// numerals, multi-word entries) are skipped and repeated words collapse
    /// into a single entry.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = tokenizer::normalize_word(line?.trim()) {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_one_word_per_line() {
        let vocab = Vocabulary::from_reader("thou\ndoth\nhath\n".as_bytes()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("doth"));
        assert!(!vocab.contains("does"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let vocab = Vocabulary::from_reader("thou\nthou\nthou".as_bytes()).unwrap();
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let vocab = Vocabulary::from_reader("thou\r\n\r\n\ndoth\r\n".as_bytes()).unwrap();
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("thou"));
        assert!(vocab.contains("doth"));
    }

    #[test]
    fn test_lines_are_normalized() {
        let vocab = Vocabulary::from_reader("Thou\ndoth \n\tHATH\n'Tis,\n".as_bytes()).unwrap();
        assert_eq!(vocab.len(), 4);
        for word in ["thou", "doth", "hath", "tis"] {
            assert!(vocab.contains(word), "missing {word}");
        }
        assert!(!vocab.contains("Thou"));
    }

    #[test]
    fn test_unusable_lines_are_skipped() {
        let vocab = Vocabulary::from_reader("1599\nwell-met\nto be\nthou\n".as_bytes()).unwrap();
        assert_eq!(vocab.len(), 1);
        assert!(vocab.contains("thou"));
    }

    #[test]
    fn test_empty_source_is_empty_vocabulary() {
        let vocab = Vocabulary::from_reader("".as_bytes()).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = Vocabulary::load("/nonexistent/bardscore/words.txt").unwrap_err();
        assert!(matches!(err, BardError::SourceUnreadable { .. }));
    }
}
