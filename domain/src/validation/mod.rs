//! Validation rule engine.
//!
//! Two validators with deliberately different contracts:
//!
//! - [`structural_check`]: baseline rules, stops at the first failure.
//!   Used for every existing record by [`validate_all`].
//! - [`strict_check`]: baseline plus submission rules, reports every
//!   failure. Used before a new record is admitted.

pub mod dataset;
pub mod strict;
pub mod structural;
pub mod violation;

pub use dataset::{DatasetIssue, DatasetIssueKind, DatasetValidation, validate_all};
pub use strict::{
    ESTIMATED_SECONDS_RANGE, MIN_EXPLANATION_CHARS, MIN_STEM_CHARS, POINTS_RANGE, strict_check,
};
pub use structural::structural_check;
pub use violation::{FAILURE_MARKER, Violation, ViolationCode, render_violations};
