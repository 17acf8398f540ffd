//! NDJSON file store for question records.
//!
//! One compact JSON object per line. Blank lines are ignored on read, and a
//! missing trailing newline is repaired on append without rewriting earlier
//! content. There is no file locking: concurrent writers can interleave
//! lines, so only one process may append at a time.

use cultpedia_application::ports::question_store::{QuestionStore, StoreError};
use cultpedia_domain::Question;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// [`QuestionStore`] backed by a newline-delimited JSON file.
#[derive(Debug, Clone)]
pub struct NdjsonQuestionStore {
    path: PathBuf,
}

impl NdjsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Decode NDJSON content into records.
///
/// Whitespace-only lines are skipped. Invalid UTF-8 is replaced with U+FFFD
/// rather than failing the load. On a decode failure the reported line
/// number is the 1-based index among non-blank lines, and nothing is
/// returned.
pub fn parse_ndjson(content: &[u8]) -> Result<Vec<Question>, StoreError> {
    let mut questions = Vec::new();
    for line in content.split(|b| *b == b'\n') {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let line = String::from_utf8_lossy(line);
        let question = serde_json::from_str(&line).map_err(|source| StoreError::Parse {
            line: questions.len() + 1,
            source,
        })?;
        questions.push(question);
    }
    Ok(questions)
}

impl QuestionStore for NdjsonQuestionStore {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        let content = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        let questions = parse_ndjson(&content)?;
        info!(
            "Loaded {} questions from {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions)
    }

    fn append(&self, question: &Question) -> Result<(), StoreError> {
        let line = question.to_ndjson_line().map_err(StoreError::Encode)?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        let len = file.seek(SeekFrom::End(0)).map_err(|e| self.io_error(e))?;
        if len > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))
                .and_then(|_| file.read_exact(&mut last))
                .map_err(|e| self.io_error(e))?;
            if last[0] != b'\n' {
                debug!(
                    "{} does not end with a newline, repairing before append",
                    self.path.display()
                );
                file.write_all(b"\n").map_err(|e| self.io_error(e))?;
            }
        }

        file.write_all(line.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.flush())
            .map_err(|e| self.io_error(e))?;

        info!("Appended '{}' to {}", question.slug, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::sample_question;

    fn line_of(slug: &str) -> String {
        sample_question(slug).to_ndjson_line().unwrap()
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.ndjson");
        let content = format!("{}\n\n   \n{}\n\n\n", line_of("a"), line_of("b"));
        fs::write(&path, content).unwrap();

        let questions = NdjsonQuestionStore::new(&path).load().unwrap();
        let slugs: Vec<_> = questions.iter().map(|q| q.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_error_counts_non_blank_lines() {
        let content = format!(
            "\n{}\n\n{}\n   \n{{\"slug\": broken\n{}\n",
            line_of("a"),
            line_of("b"),
            line_of("c")
        );
        let err = parse_ndjson(content.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().starts_with("json parsing error at line 3:"));
    }

    #[test]
    fn test_load_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.ndjson");
        let mut content = line_of("a").into_bytes();
        content.extend_from_slice(b"\n{\"slug\":\"b\xff\"}\n");
        fs::write(&path, content).unwrap();

        let questions = NdjsonQuestionStore::new(&path).load().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].slug, "b\u{FFFD}");
    }

    #[test]
    fn test_load_accepts_null_fields() {
        let mut value = serde_json::to_value(sample_question("a")).unwrap();
        value["sources"] = serde_json::Value::Null;
        value["subthemes"] = serde_json::Value::Null;
        let content = format!("{}\n{}\n", value, line_of("b"));

        let questions = parse_ndjson(content.as_bytes()).unwrap();
        assert_eq!(questions.len(), 2);
        assert!(questions[0].sources.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = NdjsonQuestionStore::new(dir.path().join("absent.ndjson"));
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = NdjsonQuestionStore::new(dir.path().join("questions.ndjson"));
        let question = sample_question("round-trip");

        store.append(&question).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![question]);
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.ndjson");
        NdjsonQuestionStore::new(&path)
            .append(&sample_question("first"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", line_of("first")));
    }

    #[test]
    fn test_append_repairs_missing_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.ndjson");
        let existing = format!("{}\n{}", line_of("a"), line_of("b"));
        fs::write(&path, &existing).unwrap();

        NdjsonQuestionStore::new(&path)
            .append(&sample_question("c"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n{}\n", existing, line_of("c")));
        assert!(!content.contains("\n\n"));
    }

    #[test]
    fn test_append_keeps_existing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.ndjson");
        let existing = format!("{}\n", line_of("a"));
        fs::write(&path, &existing).unwrap();

        let store = NdjsonQuestionStore::new(&path);
        store.append(&sample_question("b")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}{}\n", existing, line_of("b")));
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_slug_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = NdjsonQuestionStore::new(dir.path().join("questions.ndjson"));
        store.append(&sample_question("present")).unwrap();

        assert!(store.slug_exists("present").unwrap());
        assert!(!store.slug_exists("absent").unwrap());
    }
}
