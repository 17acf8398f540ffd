//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default `tracing` filter directive (e.g. `"info"`), used when no
    /// `-v` flag is given
    pub level: Option<String>,
}
