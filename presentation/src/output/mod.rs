//! Output formatting

pub mod report;
