//! Manifest reader port

use super::question_store::StoreError;
use cultpedia_domain::Manifest;

/// Read-only access to the dataset manifest.
pub trait ManifestReader: Send + Sync {
    fn read_manifest(&self) -> Result<Manifest, StoreError>;
}
