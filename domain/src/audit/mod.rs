//! Whole-dataset audits.
//!
//! Both auditors scan the full collection without stopping and return an
//! explicit sentinel when nothing is wrong.

pub mod duplicates;
pub mod translations;

pub use duplicates::{DuplicateAudit, DuplicateReport, find_duplicates};
pub use translations::{MissingTranslation, TranslationAudit, find_missing_translations};
