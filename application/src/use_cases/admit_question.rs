//! Admit Question use case.
//!
//! The only mutation path of the dataset:
//! 1. Load the candidate from its [`CandidateSource`]
//! 2. Run the strict validator
//! 3. Refuse slugs already present in the store
//! 4. Append the record
//!
//! Steps 2 and 3 reject without touching the store.

use crate::ports::candidate_source::CandidateSource;
use crate::ports::question_store::{QuestionStore, StoreError};
use cultpedia_domain::{Question, Violation, ViolationCode, strict_check};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during admission.
///
/// A rejected candidate is not an error; see [`AdmissionOutcome::Rejected`].
#[derive(Error, Debug)]
pub enum AdmitQuestionError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A candidate together with its strict validation result.
#[derive(Debug, Clone)]
pub struct CandidateReview {
    pub question: Question,
    pub violations: Vec<Violation>,
}

impl CandidateReview {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of an admission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AdmissionOutcome {
    Admitted { slug: String },
    Rejected { slug: String, violations: Vec<Violation> },
}

impl AdmissionOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AdmissionOutcome::Admitted { .. })
    }
}

/// Use case for checking and admitting new questions.
pub struct AdmitQuestionUseCase {
    store: Arc<dyn QuestionStore>,
    candidates: Arc<dyn CandidateSource>,
}

impl AdmitQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>, candidates: Arc<dyn CandidateSource>) -> Self {
        Self { store, candidates }
    }

    /// Load the pending candidate and run the strict validator on it.
    pub fn review(&self) -> Result<CandidateReview, AdmitQuestionError> {
        let question = self.candidates.load_candidate()?;
        let violations = self.check(&question);
        Ok(CandidateReview {
            question,
            violations,
        })
    }

    /// Strict validation of a single record.
    pub fn check(&self, question: &Question) -> Vec<Violation> {
        strict_check(question)
    }

    /// Validate `question` and append it when it passes.
    pub fn admit(&self, question: &Question) -> Result<AdmissionOutcome, AdmitQuestionError> {
        let violations = self.check(question);
        if !violations.is_empty() {
            warn!(
                "Rejected '{}': {} strict violations",
                question.slug,
                violations.len()
            );
            return Ok(AdmissionOutcome::Rejected {
                slug: question.slug.clone(),
                violations,
            });
        }

        if self.store.slug_exists(&question.slug)? {
            warn!("Rejected '{}': slug already in dataset", question.slug);
            return Ok(AdmissionOutcome::Rejected {
                slug: question.slug.clone(),
                violations: vec![Violation::new(ViolationCode::DuplicateSlug {
                    slug: question.slug.clone(),
                })],
            });
        }

        self.store.append(question)?;
        info!("Admitted '{}'", question.slug);
        Ok(AdmissionOutcome::Admitted {
            slug: question.slug.clone(),
        })
    }
}
