//! Errors raised while ingesting a genotype export.

use std::path::PathBuf;

use dnatraits_core::GenomeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Could not open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: {msg}")]
    MalformedRecord { line: usize, msg: String },

    /// The store rejected a record, typically because it is full.
    #[error("Could not store record at line {line}: {source}")]
    Store {
        line: usize,
        #[source]
        source: GenomeError,
    },
}

impl ParseError {
    /// 1-based line number of the offending record, if the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::FileOpen { .. } => None,
            ParseError::MalformedRecord { line, .. } | ParseError::Store { line, .. } => Some(*line),
        }
    }
}
