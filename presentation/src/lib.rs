//! Presentation layer for cultpedia
//!
//! This crate contains CLI definitions and console report formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{CandidateArgs, Cli, Command};
pub use output::report::ReportFormatter;
