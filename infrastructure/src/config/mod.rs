//! Configuration file loading for cultpedia
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CULTPEDIA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./cultpedia.toml` or `./.cultpedia.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cultpedia/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDatasetConfig, FileLoggingConfig, FileOutputConfig, Severity,
};
pub use loader::ConfigLoader;
