//! File adapters for the application ports.
//!
//! - [`NdjsonQuestionStore`]: the dataset itself
//! - [`JsonCandidateFile`]: the pending submission
//! - [`JsonManifestFile`]: the dataset manifest

mod json_file;
mod ndjson;

#[cfg(test)]
pub(crate) mod test_support;

pub use json_file::{JsonCandidateFile, JsonManifestFile};
pub use ndjson::{NdjsonQuestionStore, parse_ndjson};
