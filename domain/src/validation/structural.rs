//! Baseline structural validator.
//!
//! Applied to every record during whole-dataset checks. It stops at the
//! first broken rule, so the result holds at most one violation. Rule order
//! is kind → slug → theme → answer count → answer slugs → correct count →
//! languages, and callers depend on it.

use super::violation::{Violation, ViolationCode};
use crate::question::{ANSWER_COUNT, Language, QUESTION_KIND, Question};

/// Check the baseline rules, returning the first violation found (if any).
pub fn structural_check(question: &Question) -> Vec<Violation> {
    first_structural_violation(question)
        .map(Violation::new)
        .into_iter()
        .collect()
}

fn first_structural_violation(q: &Question) -> Option<ViolationCode> {
    if q.kind != QUESTION_KIND {
        return Some(ViolationCode::InvalidKind);
    }
    if q.slug.is_empty() {
        return Some(ViolationCode::MissingSlug);
    }
    if q.theme.slug.is_empty() {
        return Some(ViolationCode::MissingTheme);
    }
    if q.answers.len() != ANSWER_COUNT {
        return Some(ViolationCode::AnswerCount {
            found: q.answers.len(),
        });
    }
    if q.answers.iter().any(|a| a.slug.is_empty()) {
        return Some(ViolationCode::MissingAnswerSlug);
    }
    let correct = q.correct_answer_count();
    if correct != 1 {
        return Some(ViolationCode::CorrectAnswerCount { found: correct });
    }
    for language in Language::ALL {
        if !q.has_language(language) {
            return Some(ViolationCode::MissingQuestionTranslation { language });
        }
        if let Some(answer) = q.answers.iter().find(|a| !a.has_language(language)) {
            return Some(ViolationCode::MissingAnswerTranslation {
                language,
                answer: answer.slug.clone(),
            });
        }
    }
    None
}
