//! Single-document JSON adapters: the pending candidate and the manifest.

use cultpedia_application::ports::candidate_source::CandidateSource;
use cultpedia_application::ports::manifest_reader::ManifestReader;
use cultpedia_application::ports::question_store::StoreError;
use cultpedia_domain::{Manifest, Question};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a new submission from a JSON file (pretty-printed or compact).
#[derive(Debug, Clone)]
pub struct JsonCandidateFile {
    path: PathBuf,
}

impl JsonCandidateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CandidateSource for JsonCandidateFile {
    fn load_candidate(&self) -> Result<Question, StoreError> {
        let question: Question = read_json(&self.path)?;
        debug!(
            "Loaded candidate '{}' from {}",
            question.slug,
            self.path.display()
        );
        Ok(question)
    }
}

/// Reads the dataset manifest.
#[derive(Debug, Clone)]
pub struct JsonManifestFile {
    path: PathBuf,
}

impl JsonManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestReader for JsonManifestFile {
    fn read_manifest(&self) -> Result<Manifest, StoreError> {
        read_json(&self.path)
    }
}
