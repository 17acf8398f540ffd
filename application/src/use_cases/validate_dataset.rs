//! Validate Dataset use case.
//!
//! Loads the whole dataset and runs the baseline validator with duplicate
//! slug tracking over it.

use crate::ports::question_store::{QuestionStore, StoreError};
use cultpedia_domain::{DatasetValidation, validate_all};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while validating the dataset.
#[derive(Error, Debug)]
pub enum ValidateDatasetError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for validating every stored record.
pub struct ValidateDatasetUseCase {
    store: Arc<dyn QuestionStore>,
}

impl ValidateDatasetUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<DatasetValidation, ValidateDatasetError> {
        let questions = self.store.load()?;
        debug!("Validating {} records", questions.len());

        let result = validate_all(&questions);
        info!(
            "Dataset validation: {} records, {} structural issues, {} duplicates",
            result.records(),
            result.structural_count(),
            result.duplicate_count()
        );
        Ok(result)
    }
}
