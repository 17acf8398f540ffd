//! Candidate source port
//!
//! A candidate is a single new submission waiting to be checked and
//! admitted into the dataset.

use super::question_store::StoreError;
use cultpedia_domain::Question;

/// Provides the question a contributor wants to add.
pub trait CandidateSource: Send + Sync {
    fn load_candidate(&self) -> Result<Question, StoreError>;
}
