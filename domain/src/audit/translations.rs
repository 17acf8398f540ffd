//! Missing translation auditor

use crate::question::{Language, Question};
use std::fmt;

/// A required language absent from a question or one of its answers.
///
/// Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingTranslation {
    Question {
        position: usize,
        slug: String,
        language: Language,
    },
    Answer {
        position: usize,
        slug: String,
        answer_position: usize,
        language: Language,
    },
}

impl MissingTranslation {
    pub fn language(&self) -> Language {
        match self {
            MissingTranslation::Question { language, .. }
            | MissingTranslation::Answer { language, .. } => *language,
        }
    }
}

impl fmt::Display for MissingTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingTranslation::Question {
                position,
                slug,
                language,
            } => write!(
                f,
                "question line {} (slug: {}): missing {} translation in title/question/explanation",
                position, slug, language
            ),
            MissingTranslation::Answer {
                position,
                slug,
                answer_position,
                language,
            } => write!(
                f,
                "answer {} of question line {} (slug: {}): missing {} translation",
                answer_position, position, slug, language
            ),
        }
    }
}

/// Outcome of [`find_missing_translations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationAudit {
    AllPresent,
    Missing(Vec<MissingTranslation>),
}

impl TranslationAudit {
    pub fn is_clean(&self) -> bool {
        matches!(self, TranslationAudit::AllPresent)
    }

    pub fn reports(&self) -> &[MissingTranslation] {
        match self {
            TranslationAudit::AllPresent => &[],
            TranslationAudit::Missing(reports) => reports,
        }
    }
}

/// Report every missing required language on every question and answer.
///
/// For each record and language the question-level report (if any) comes
/// first, followed by one report per answer lacking the language.
pub fn find_missing_translations(questions: &[Question]) -> TranslationAudit {
    let mut missing = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let position = index + 1;
        for language in Language::ALL {
            if !question.has_language(language) {
                missing.push(MissingTranslation::Question {
                    position,
                    slug: question.slug.clone(),
                    language,
                });
            }
            for (answer_index, answer) in question.answers.iter().enumerate() {
                if !answer.has_language(language) {
                    missing.push(MissingTranslation::Answer {
                        position,
                        slug: question.slug.clone(),
                        answer_position: answer_index + 1,
                        language,
                    });
                }
            }
        }
    }

    if missing.is_empty() {
        TranslationAudit::AllPresent
    } else {
        TranslationAudit::Missing(missing)
    }
}
