//! Dataset Version use case.
//!
//! Reads the published version from the manifest for display. Any failure
//! degrades to [`UNKNOWN_VERSION`] instead of an error.

use crate::ports::manifest_reader::ManifestReader;
use std::sync::Arc;
use tracing::debug;

/// Shown when the manifest cannot be read.
pub const UNKNOWN_VERSION: &str = "unknown";

pub struct DatasetVersionUseCase {
    manifest: Arc<dyn ManifestReader>,
}

impl DatasetVersionUseCase {
    pub fn new(manifest: Arc<dyn ManifestReader>) -> Self {
        Self { manifest }
    }

    pub fn execute(&self) -> String {
        match self.manifest.read_manifest() {
            Ok(manifest) => manifest.version,
            Err(e) => {
                debug!("Manifest unavailable: {}", e);
                UNKNOWN_VERSION.to_string()
            }
        }
    }
}
