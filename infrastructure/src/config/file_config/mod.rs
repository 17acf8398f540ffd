//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section falls back to defaults.

mod dataset;
mod logging;
mod output;

pub use dataset::FileDatasetConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work.
    Error,
    /// The configuration works but is probably not what was intended.
    Warning,
}

/// A detected problem in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key path (e.g. `"dataset.questions"`)
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Dataset file locations
    pub dataset: FileDatasetConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let paths = [
            ("dataset.questions", &self.dataset.questions),
            ("dataset.manifest", &self.dataset.manifest),
            ("dataset.new_question", &self.dataset.new_question),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    field: field.to_string(),
                    message: format!("{}: path must not be empty", field),
                });
            }
        }

        if let Err(issue) = self.dataset.submission_path(None) {
            issues.push(issue);
        }

        if let Some(level) = &self.logging.level
            && level.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "logging.level".to_string(),
                message: "logging.level is empty, falling back to 'warn'".to_string(),
            });
        }

        issues
    }

    /// Whether any issue is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[dataset]
questions = "datasets/custom/questions.ndjson"
manifest = "datasets/custom/manifest.json"
new_question = "submissions/next.json"

[output]
color = false

[logging]
level = "debug"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.dataset.questions,
            PathBuf::from("datasets/custom/questions.ndjson")
        );
        assert_eq!(
            config.dataset.new_question,
            PathBuf::from("submissions/next.json")
        );
        assert!(!config.output.color);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_empty_path() {
        let mut config = FileConfig::default();
        config.dataset.manifest = PathBuf::new();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "dataset.manifest");
        assert!(FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_validate_candidate_is_dataset() {
        let mut config = FileConfig::default();
        config.dataset.new_question = config.dataset.questions.clone();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_blank_log_level_warns() {
        let mut config = FileConfig::default();
        config.logging.level = Some("  ".to_string());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!FileConfig::has_errors(&issues));
    }
}
