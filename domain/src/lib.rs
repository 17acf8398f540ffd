//! Domain layer for cultpedia
//!
//! This crate contains the question record model, the validation rule engine
//! and the dataset auditors. It has no dependencies on file I/O or
//! presentation concerns: every operation takes records in and returns
//! results as data.
//!
//! # Core Concepts
//!
//! ## Records
//!
//! A [`Question`] is one trivia item with content in three languages
//! (fr, en, es) and exactly four [`Answer`]s, one of them correct.
//!
//! ## Two-tier validation
//!
//! - **Structural** ([`structural_check`]): baseline rules, first failure only.
//! - **Strict** ([`strict_check`]): baseline plus submission rules, all failures.
//!
//! ## Audits
//!
//! Whole-collection scans for repeated slugs ([`find_duplicates`]) and
//! missing translations ([`find_missing_translations`]).

pub mod audit;
pub mod core;
pub mod manifest;
pub mod question;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use audit::{
    DuplicateAudit, DuplicateReport, MissingTranslation, TranslationAudit, find_duplicates,
    find_missing_translations,
};
pub use core::error::DomainError;
pub use manifest::Manifest;
pub use question::{
    ANSWER_COUNT, Answer, AnswerLabel, Difficulty, Language, LocalizedContent, QUESTION_KIND,
    Question, QuestionType, ThemeRef,
};
pub use validation::{
    DatasetIssue, DatasetIssueKind, DatasetValidation, FAILURE_MARKER, Violation, ViolationCode,
    render_violations, strict_check, structural_check, validate_all,
};
