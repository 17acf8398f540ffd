//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod admit_question;
pub mod audit_dataset;
pub mod dataset_version;
pub mod validate_dataset;

#[cfg(test)]
pub(crate) mod test_support;
