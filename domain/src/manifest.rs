//! Dataset manifest value object
//!
//! The manifest sits next to the questions file and describes the published
//! dataset. This crate only reads it; producing it is a release concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Published dataset metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub schema_version: String,
    pub dataset: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub checksums: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_manifest() {
        let json = r#"{
            "schema_version": "1.0",
            "dataset": "general-knowledge",
            "version": "2.3.1",
            "created_at": "2025-01-10T08:00:00Z",
            "updated_at": "2025-06-02T17:30:00Z",
            "includes": ["questions.ndjson", "themes.ndjson"],
            "counts": {"questions": 412, "themes": 18},
            "checksums": {"questions.ndjson": "sha256:abc"}
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.version, "2.3.1");
        assert_eq!(manifest.counts["questions"], 412);
        assert_eq!(manifest.includes.len(), 2);
        assert!(manifest.updated_at > manifest.created_at);
    }

    #[test]
    fn test_missing_version_is_an_error() {
        let json = r#"{"schema_version":"1.0","dataset":"gk"}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }
}
