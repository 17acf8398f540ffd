//! Violation value objects
//!
//! A violation is data, not an error: validators always return the list of
//! broken rules and leave it to the caller to decide what to do with it.

use crate::question::Language;
use std::fmt;

/// Glyph prefixed to every rendered violation line.
pub const FAILURE_MARKER: &str = "✗";

/// Identifies the rule a record broke, with the context needed to explain it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationCode {
    // ==================== Structural rules ====================
    /// `kind` is not `"question"`.
    InvalidKind,
    /// `slug` is empty.
    MissingSlug,
    /// `theme.slug` is empty.
    MissingTheme,
    /// Answer list does not hold exactly four entries.
    AnswerCount { found: usize },
    /// An answer has an empty slug.
    MissingAnswerSlug,
    /// Not exactly one answer is flagged correct.
    CorrectAnswerCount { found: usize },
    /// The question has no content for a required language.
    MissingQuestionTranslation { language: Language },
    /// An answer has no label for a required language.
    MissingAnswerTranslation { language: Language, answer: String },

    // ==================== Strict rules ====================
    /// The language map does not hold exactly three entries.
    LanguageCount { found: usize },
    /// The language map holds a code outside fr/en/es.
    UnsupportedLanguage { code: String },
    /// Trimmed stem shorter than the minimum.
    StemTooShort {
        language: String,
        min: usize,
        found: usize,
    },
    /// Trimmed explanation shorter than the minimum.
    ExplanationTooShort {
        language: String,
        min: usize,
        found: usize,
    },
    InvalidDifficulty { value: String },
    PointsOutOfRange { value: f64 },
    MissingSources,
    InvalidQuestionType { value: String },
    EstimatedSecondsOutOfRange { value: i64 },

    // ==================== Dataset rules ====================
    /// The slug is already used by another record.
    DuplicateSlug { slug: String },
}

impl ViolationCode {
    /// Human-readable description of the broken rule.
    pub fn describe(&self) -> String {
        match self {
            ViolationCode::InvalidKind => "kind must be 'question'".to_string(),
            ViolationCode::MissingSlug => "slug is required".to_string(),
            ViolationCode::MissingTheme => "theme.slug is required".to_string(),
            ViolationCode::AnswerCount { .. } => "must have exactly 4 answers".to_string(),
            ViolationCode::MissingAnswerSlug => "answer slug is required".to_string(),
            ViolationCode::CorrectAnswerCount { .. } => {
                "must have exactly one correct answer".to_string()
            }
            ViolationCode::MissingQuestionTranslation { language } => {
                format!("missing {} translation in question", language)
            }
            ViolationCode::MissingAnswerTranslation { language, answer } => {
                format!("missing {} translation in answer {}", language, answer)
            }
            ViolationCode::LanguageCount { found } => format!(
                "Exactly 3 languages required (fr, en, es), got {}",
                found
            ),
            ViolationCode::UnsupportedLanguage { code } => {
                format!("Invalid language '{}' (only fr, en, es allowed)", code)
            }
            ViolationCode::StemTooShort {
                language,
                min,
                found,
            } => format!(
                "{} stem too short (min {} chars, got {})",
                language, min, found
            ),
            ViolationCode::ExplanationTooShort {
                language,
                min,
                found,
            } => format!(
                "{} explanation too short (min {} chars, got {})",
                language, min, found
            ),
            ViolationCode::InvalidDifficulty { value } => format!(
                "Invalid difficulty '{}' (allowed: beginner, intermediate, expert)",
                value
            ),
            ViolationCode::PointsOutOfRange { value } => {
                format!("Points must be between 0.5 and 5.0 (got {:.1})", value)
            }
            ViolationCode::MissingSources => "At least one source URL is required".to_string(),
            ViolationCode::InvalidQuestionType { value } => format!(
                "Invalid qtype '{}' (allowed: single_choice, multiple_choice)",
                value
            ),
            ViolationCode::EstimatedSecondsOutOfRange { value } => format!(
                "Estimated seconds must be between 5 and 300 (got {})",
                value
            ),
            ViolationCode::DuplicateSlug { slug } => {
                format!("slug '{}' already exists in the dataset", slug)
            }
        }
    }
}

/// A broken validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationCode) -> Self {
        let message = code.describe();
        Self { code, message }
    }
}

impl From<ViolationCode> for Violation {
    fn from(code: ViolationCode) -> Self {
        Violation::new(code)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Render violations one per line, each prefixed with [`FAILURE_MARKER`].
///
/// Returns an empty string for an empty list.
pub fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", FAILURE_MARKER, v.message))
        .collect::<Vec<_>>()
        .join("\n")
}
