//! Question record entities
//!
//! These structs mirror the NDJSON wire format field for field. Decoding is
//! tolerant: a missing or `null` field becomes its zero value and is then reported by
//! the validators instead of failing the whole load.

use super::value_objects::{Difficulty, Language, QuestionType};
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The only accepted value of [`Question::kind`].
pub const QUESTION_KIND: &str = "question";

/// Number of answers every question carries.
pub const ANSWER_COUNT: usize = 4;

/// Decode `null` as the field's zero value, like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Reference to a theme, sub-theme or tag by slug.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeRef {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
}

impl ThemeRef {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Localized question text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedContent {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stem: String,
    #[serde(deserialize_with = "null_as_default")]
    pub explanation: String,
}

/// Localized answer text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerLabel {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Answer {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_correct: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub i18n: BTreeMap<String, AnswerLabel>,
}

impl Answer {
    /// Whether this answer carries a label for `language`.
    pub fn has_language(&self, language: Language) -> bool {
        self.i18n.contains_key(language.as_str())
    }

    /// The label for `language`, if present.
    pub fn label(&self, language: Language) -> Option<&str> {
        self.i18n.get(language.as_str()).map(|l| l.label.as_str())
    }
}

/// A trivia question record (Entity).
///
/// Identified by its `slug`, which must be unique across the dataset.
/// Records are immutable once loaded; the only mutation path is appending a
/// new record to the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub theme: ThemeRef,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub subthemes: Vec<ThemeRef>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<ThemeRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub qtype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub estimated_seconds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub points: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub shuffle_answers: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub i18n: BTreeMap<String, LocalizedContent>,
    #[serde(deserialize_with = "null_as_default")]
    pub answers: Vec<Answer>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
}

impl Question {
    /// Whether the question itself carries content for `language`.
    pub fn has_language(&self, language: Language) -> bool {
        self.i18n.contains_key(language.as_str())
    }

    /// Localized content for `language`, if present.
    pub fn content(&self, language: Language) -> Option<&LocalizedContent> {
        self.i18n.get(language.as_str())
    }

    /// Number of answers flagged as correct.
    pub fn correct_answer_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// Parsed difficulty tier.
    pub fn parsed_difficulty(&self) -> Result<Difficulty, DomainError> {
        self.difficulty.parse()
    }

    /// Parsed question type.
    pub fn parsed_qtype(&self) -> Result<QuestionType, DomainError> {
        self.qtype.parse()
    }

    /// Encode as a single compact NDJSON line (no trailing newline).
    pub fn to_ndjson_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
