//! Application layer for cultpedia
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    candidate_source::CandidateSource,
    manifest_reader::ManifestReader,
    question_store::{QuestionStore, StoreError},
};
pub use use_cases::admit_question::{
    AdmissionOutcome, AdmitQuestionError, AdmitQuestionUseCase, CandidateReview,
};
pub use use_cases::audit_dataset::{AuditDatasetError, AuditDatasetUseCase};
pub use use_cases::dataset_version::{DatasetVersionUseCase, UNKNOWN_VERSION};
pub use use_cases::validate_dataset::{ValidateDatasetError, ValidateDatasetUseCase};
