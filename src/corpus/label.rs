// Ground-truth labels from the corpus naming convention.
//
// Files are named `<label>.<disambiguator>.<extension>`; the label token
// "shakespeare" marks a genuine fragment. This is the oracle the classifier
// is graded against, never part of the classification itself.

use std::path::Path;

/// Label token that marks a positive example.
pub const SHAKESPEARE_LABEL: &str = "shakespeare";

/// Leading segment of the file name, up to the first '.'.
pub fn label_token(identifier: &Path) -> Option<&str> {
    let name = identifier.file_name()?.to_str()?;
    name.split('.').next()
}

/// True iff the identifier's label token is exactly `shakespeare`.
pub fn is_shakespeare(identifier: impl AsRef<Path>) -> bool {
    label_token(identifier.as_ref()) == Some(SHAKESPEARE_LABEL)
}
