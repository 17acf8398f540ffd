//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use cultpedia_domain::Language;
use std::path::PathBuf;

/// CLI arguments for cultpedia
#[derive(Parser, Debug)]
#[command(name = "cultpedia")]
#[command(author, version, about = "Question dataset management tool")]
#[command(long_about = r#"
Cultpedia validates and grows a multi-language trivia dataset stored as
newline-delimited JSON (one question per line).

For contributors:
  1. Write your question to new_question.json
  2. cultpedia check-new        Strict validation of the submission
  3. cultpedia preview          Render it in one language
  4. cultpedia add --yes        Append it to the dataset

For maintainers:
  cultpedia validate            Structural checks + duplicate slugs
  cultpedia check-duplicates    Every repeated slug
  cultpedia check-translations  Every missing fr/en/es translation

Configuration files are loaded from (in priority order):
1. CULTPEDIA_<SECTION>__<KEY> environment variables
2. --config <path>                       Explicit config file
3. ./cultpedia.toml                      Project-level config
4. ~/.config/cultpedia/config.toml       Global config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Dataset file to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,
}

/// Location of the pending submission
#[derive(Args, Debug, Clone, Default)]
pub struct CandidateArgs {
    /// Submission file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the dataset for consistency and correctness
    Validate,

    /// Report every duplicated slug in the dataset
    CheckDuplicates,

    /// Report every missing translation in the dataset
    CheckTranslations,

    /// Strictly validate the pending submission
    CheckNew(CandidateArgs),

    /// Render the pending submission in one language
    Preview {
        #[command(flatten)]
        candidate: CandidateArgs,

        /// Language to display (fr, en, es)
        #[arg(short, long, default_value = "en")]
        lang: Language,
    },

    /// Append the pending submission to the dataset
    Add {
        #[command(flatten)]
        candidate: CandidateArgs,

        /// Confirm the addition (without it, only the summary is shown)
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the dataset version from the manifest
    Version,
}
