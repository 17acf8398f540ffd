//! Infrastructure layer for cultpedia
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileDatasetConfig, FileLoggingConfig,
    FileOutputConfig, Severity,
};
pub use store::{JsonCandidateFile, JsonManifestFile, NdjsonQuestionStore, parse_ndjson};
