//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid language '{0}' (only fr, en, es allowed)")]
    InvalidLanguage(String),

    #[error("Invalid difficulty '{0}' (allowed: beginner, intermediate, expert)")]
    InvalidDifficulty(String),

    #[error("Invalid qtype '{0}' (allowed: single_choice, multiple_choice)")]
    InvalidQuestionType(String),
}
