// Corpus discovery: list a flat directory and read each fragment.
//
// The listing is a snapshot returned to the caller and passed explicitly
// into evaluation. Paths are sorted so runs are reproducible regardless of
// the order the filesystem returns entries in.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::Document;
use crate::error::{BardError, Result};

/// Extension used by the reference corpus.
pub const DEFAULT_EXTENSION: &str = "txt";

/// List regular files in `dir` whose extension is `extension`, sorted by path.
///
/// Subdirectories are not descended into.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BardError::unreadable(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BardError::unreadable(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }
    paths.sort();

    info!(
        dir = %dir.display(),
        extension,
        count = paths.len(),
        "Discovered corpus files"
    );
    Ok(paths)
}

/// Read one file into a labeled document.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|e| BardError::unreadable(path, e))?;
    Ok(Document::new(path, text))
}

/// Read every listed file, failing on the first unreadable one.
pub fn load_documents(paths: &[PathBuf], show_progress: bool) -> Result<Vec<Document>> {
    let pb = if show_progress {
        ProgressBar::new(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Reading [{bar:30}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        match load_document(path) {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(documents)
}

/// Discover and read a whole corpus directory.
pub fn load_corpus(dir: &Path, extension: &str, show_progress: bool) -> Result<Vec<Document>> {
    let paths = list_documents(dir, extension)?;
    load_documents(&paths, show_progress)
}
