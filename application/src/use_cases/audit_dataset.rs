//! Audit Dataset use case.
//!
//! Maintainer-facing scans over the whole dataset: repeated slugs and
//! missing translations.

use crate::ports::question_store::{QuestionStore, StoreError};
use cultpedia_domain::{
    DuplicateAudit, TranslationAudit, find_duplicates, find_missing_translations,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during an audit.
#[derive(Error, Debug)]
pub enum AuditDatasetError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case running the dataset auditors.
pub struct AuditDatasetUseCase {
    store: Arc<dyn QuestionStore>,
}

impl AuditDatasetUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn duplicates(&self) -> Result<DuplicateAudit, AuditDatasetError> {
        let questions = self.store.load()?;
        let audit = find_duplicates(&questions);
        info!(
            "Duplicate audit over {} records: {} repeats",
            questions.len(),
            audit.reports().len()
        );
        Ok(audit)
    }

    pub fn translations(&self) -> Result<TranslationAudit, AuditDatasetError> {
        let questions = self.store.load()?;
        let audit = find_missing_translations(&questions);
        info!(
            "Translation audit over {} records: {} missing",
            questions.len(),
            audit.reports().len()
        );
        Ok(audit)
    }
}
