//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod candidate_source;
pub mod manifest_reader;
pub mod question_store;
