//! Dataset file locations from TOML (`[dataset]` section)

use super::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw dataset configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// NDJSON file holding one question per line
    pub questions: PathBuf,
    /// Manifest describing the published dataset
    pub manifest: PathBuf,
    /// Pending submission checked by `check-new`, `preview` and `add`
    pub new_question: PathBuf,
}

impl Default for FileDatasetConfig {
    fn default() -> Self {
        Self {
            questions: PathBuf::from("datasets/general-knowledge/questions.ndjson"),
            manifest: PathBuf::from("datasets/general-knowledge/manifest.json"),
            new_question: PathBuf::from("new_question.json"),
        }
    }
}

impl FileDatasetConfig {
    /// Resolve the submission file, preferring `file` over `new_question`.
    ///
    /// The submission must never be the dataset file itself.
    pub fn submission_path(&self, file: Option<&Path>) -> Result<PathBuf, ConfigIssue> {
        let path = file.unwrap_or(self.new_question.as_path());
        if !self.questions.as_os_str().is_empty() && path == self.questions.as_path() {
            return Err(ConfigIssue {
                severity: Severity::Error,
                field: "dataset.new_question".to_string(),
                message: format!(
                    "submission file {} is the dataset file itself",
                    path.display()
                ),
            });
        }
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_deserialize_partial() {
        let toml_str = r#"
[dataset]
questions = "data/q.ndjson"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.questions, PathBuf::from("data/q.ndjson"));
        assert_eq!(
            config.dataset.manifest,
            FileDatasetConfig::default().manifest
        );
    }

    #[test]
    fn test_submission_path_prefers_explicit_file() {
        let config = FileDatasetConfig::default();
        assert_eq!(
            config.submission_path(None).unwrap(),
            PathBuf::from("new_question.json")
        );
        assert_eq!(
            config
                .submission_path(Some(Path::new("drafts/q.json")))
                .unwrap(),
            PathBuf::from("drafts/q.json")
        );
    }

    #[test]
    fn test_submission_path_rejects_dataset_file() {
        let config = FileDatasetConfig::default();
        let issue = config
            .submission_path(Some(config.questions.as_path()))
            .unwrap_err();
        assert_eq!(issue.severity, Severity::Error);
        assert!(issue.message.contains("questions.ndjson"));
    }
}
