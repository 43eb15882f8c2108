// Bardscore: guess whether a text fragment was written by Shakespeare.
//
// This is the library root. The scoring core lives in `text`, `vocabulary`,
// `scoring` and `evaluation`; `corpus`, `config` and `output` are the thin
// collaborators the CLI wires around it.

pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod output;
pub mod scoring;
pub mod text;
pub mod vocabulary;

pub use error::{BardError, Result};
