//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: failures parsing domain value objects

pub mod error;
