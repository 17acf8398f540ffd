//! Whole-dataset validation.
//!
//! Runs the baseline validator over every record and tracks slugs already
//! seen. Nothing stops early at this level: all records are visited and all
//! issues are collected, even though each per-record check short-circuits.

use super::structural::structural_check;
use super::violation::Violation;
use crate::question::Question;
use std::collections::HashSet;
use std::fmt;

/// What went wrong with a record during dataset validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetIssueKind {
    /// The record failed the baseline validator.
    Structural(Violation),
    /// The record reuses the slug of an earlier record.
    DuplicateSlug,
}

/// An issue tied to a record position (1-based) and slug.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIssue {
    pub position: usize,
    pub slug: String,
    pub kind: DatasetIssueKind,
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DatasetIssueKind::Structural(violation) => write!(
                f,
                "line {} (slug: {}): {}",
                self.position, self.slug, violation
            ),
            DatasetIssueKind::DuplicateSlug => write!(
                f,
                "duplicate detected for slug '{}' at line {}",
                self.slug, self.position
            ),
        }
    }
}

/// Result of [`validate_all`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetValidation {
    records: usize,
    issues: Vec<DatasetIssue>,
}

impl DatasetValidation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of records inspected.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn issues(&self) -> &[DatasetIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<DatasetIssue> {
        self.issues
    }

    pub fn structural_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i.kind, DatasetIssueKind::Structural(_)))
            .count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.issues.len() - self.structural_count()
    }
}

/// Validate every record and report structural failures and repeated slugs.
///
/// A record that fails the baseline validator is not registered as "seen",
/// so a later record with the same slug is not reported as a duplicate of it.
pub fn validate_all(questions: &[Question]) -> DatasetValidation {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut issues = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let position = index + 1;

        if let Some(violation) = structural_check(question).into_iter().next() {
            issues.push(DatasetIssue {
                position,
                slug: question.slug.clone(),
                kind: DatasetIssueKind::Structural(violation),
            });
            continue;
        }

        if !seen.insert(question.slug.as_str()) {
            issues.push(DatasetIssue {
                position,
                slug: question.slug.clone(),
                kind: DatasetIssueKind::DuplicateSlug,
            });
        }
    }

    DatasetValidation {
        records: questions.len(),
        issues,
    }
}
