//! Duplicate slug auditor

use crate::question::Question;
use std::collections::HashMap;
use std::fmt;

/// A repeated slug: where it first appeared and where it appeared again.
///
/// Positions are 1-based record positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub slug: String,
    pub first_index: usize,
    pub duplicate_index: usize,
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slug '{}' duplicated: first occurrence line {}, occurrence line {}",
            self.slug, self.first_index, self.duplicate_index
        )
    }
}

/// Outcome of [`find_duplicates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateAudit {
    NoDuplicates,
    Found(Vec<DuplicateReport>),
}

impl DuplicateAudit {
    pub fn is_clean(&self) -> bool {
        matches!(self, DuplicateAudit::NoDuplicates)
    }

    /// Reports in discovery order (empty when clean).
    pub fn reports(&self) -> &[DuplicateReport] {
        match self {
            DuplicateAudit::NoDuplicates => &[],
            DuplicateAudit::Found(reports) => reports,
        }
    }
}

/// Report every repeat occurrence of a slug, against its first occurrence.
pub fn find_duplicates(questions: &[Question]) -> DuplicateAudit {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut reports = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        match first_seen.get(question.slug.as_str()) {
            Some(&first) => reports.push(DuplicateReport {
                slug: question.slug.clone(),
                first_index: first + 1,
                duplicate_index: index + 1,
            }),
            None => {
                first_seen.insert(question.slug.as_str(), index);
            }
        }
    }

    if reports.is_empty() {
        DuplicateAudit::NoDuplicates
    } else {
        DuplicateAudit::Found(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_slugs(slugs: &[&str]) -> Vec<Question> {
        slugs
            .iter()
            .map(|s| Question {
                slug: s.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_every_repeat_reported_against_first() {
        let audit = find_duplicates(&with_slugs(&["a", "b", "a", "a"]));
        assert_eq!(
            audit.reports(),
            &[
                DuplicateReport {
                    slug: "a".into(),
                    first_index: 1,
                    duplicate_index: 3,
                },
                DuplicateReport {
                    slug: "a".into(),
                    first_index: 1,
                    duplicate_index: 4,
                },
            ]
        );
    }

    #[test]
    fn test_discovery_order_across_slugs() {
        let audit = find_duplicates(&with_slugs(&["x", "y", "y", "x"]));
        let pairs: Vec<_> = audit
            .reports()
            .iter()
            .map(|r| (r.slug.as_str(), r.first_index, r.duplicate_index))
            .collect();
        assert_eq!(pairs, vec![("y", 2, 3), ("x", 1, 4)]);
    }

    #[test]
    fn test_no_duplicates_sentinel() {
        assert_eq!(
            find_duplicates(&with_slugs(&["a", "b"])),
            DuplicateAudit::NoDuplicates
        );
        assert!(find_duplicates(&[]).is_clean());
    }

    #[test]
    fn test_display() {
        let report = DuplicateReport {
            slug: "a".into(),
            first_index: 1,
            duplicate_index: 3,
        };
        assert_eq!(
            report.to_string(),
            "slug 'a' duplicated: first occurrence line 1, occurrence line 3"
        );
    }
}
