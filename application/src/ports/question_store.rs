//! Question store port
//!
//! Defines the interface for reading and appending dataset records.
//! The NDJSON file adapter lives in the infrastructure layer.

use cultpedia_domain::Question;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store, candidate and manifest adapters.
///
/// Validation failures are never reported here; they are returned as
/// [`Violation`](cultpedia_domain::Violation) data by the validators.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A dataset line could not be decoded. `line` counts non-blank lines
    /// only, starting at 1.
    #[error("json parsing error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A standalone JSON document (candidate, manifest) could not be decoded.
    #[error("invalid JSON in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode question: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// The 1-based non-blank line number of a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            StoreError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Backing store for the question dataset.
///
/// Implementations assume a single writer; no locking is provided.
pub trait QuestionStore: Send + Sync {
    /// Load every record, aborting on the first malformed line.
    fn load(&self) -> Result<Vec<Question>, StoreError>;

    /// Append one record as a new line.
    fn append(&self, question: &Question) -> Result<(), StoreError>;

    /// Whether any stored record uses `slug`.
    fn slug_exists(&self, slug: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.iter().any(|q| q.slug == slug))
    }
}
