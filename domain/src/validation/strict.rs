//! Strict validator for new submissions.
//!
//! Unlike [`structural_check`](super::structural::structural_check) this
//! validator accumulates: every rule is evaluated and every failure is
//! reported, so a contributor can fix a submission in one pass.

use super::structural::structural_check;
use super::violation::{Violation, ViolationCode};
use crate::question::{Language, Question};
use std::ops::RangeInclusive;

/// Minimum trimmed stem length, in characters.
pub const MIN_STEM_CHARS: usize = 10;
/// Minimum trimmed explanation length, in characters.
pub const MIN_EXPLANATION_CHARS: usize = 20;
/// Accepted `points` range.
pub const POINTS_RANGE: RangeInclusive<f64> = 0.5..=5.0;
/// Accepted `estimated_seconds` range.
pub const ESTIMATED_SECONDS_RANGE: RangeInclusive<i64> = 5..=300;

/// Evaluate the baseline rule set plus every strict rule.
///
/// An empty result means the question may be admitted.
pub fn strict_check(question: &Question) -> Vec<Violation> {
    let mut codes: Vec<ViolationCode> = structural_check(question)
        .into_iter()
        .map(|v| v.code)
        .collect();

    check_language_set(question, &mut codes);
    check_text_lengths(question, &mut codes);

    if question.parsed_difficulty().is_err() {
        codes.push(ViolationCode::InvalidDifficulty {
            value: question.difficulty.clone(),
        });
    }

    if !POINTS_RANGE.contains(&question.points) {
        codes.push(ViolationCode::PointsOutOfRange {
            value: question.points,
        });
    }

    if question.sources.is_empty() {
        codes.push(ViolationCode::MissingSources);
    }

    if question.parsed_qtype().is_err() {
        codes.push(ViolationCode::InvalidQuestionType {
            value: question.qtype.clone(),
        });
    }

    if !ESTIMATED_SECONDS_RANGE.contains(&question.estimated_seconds) {
        codes.push(ViolationCode::EstimatedSecondsOutOfRange {
            value: question.estimated_seconds,
        });
    }

    codes.into_iter().map(Violation::new).collect()
}

fn check_language_set(q: &Question, codes: &mut Vec<ViolationCode>) {
    if q.i18n.len() != Language::ALL.len() {
        codes.push(ViolationCode::LanguageCount {
            found: q.i18n.len(),
        });
    }
    for code in q.i18n.keys() {
        if !Language::is_supported(code) {
            codes.push(ViolationCode::UnsupportedLanguage { code: code.clone() });
        }
    }
}

fn check_text_lengths(q: &Question, codes: &mut Vec<ViolationCode>) {
    for (language, content) in &q.i18n {
        let stem = trimmed_len(&content.stem);
        if stem < MIN_STEM_CHARS {
            codes.push(ViolationCode::StemTooShort {
                language: language.clone(),
                min: MIN_STEM_CHARS,
                found: stem,
            });
        }
        let explanation = trimmed_len(&content.explanation);
        if explanation < MIN_EXPLANATION_CHARS {
            codes.push(ViolationCode::ExplanationTooShort {
                language: language.clone(),
                min: MIN_EXPLANATION_CHARS,
                found: explanation,
            });
        }
    }
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
