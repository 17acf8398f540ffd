//! CLI entrypoint for cultpedia
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use cultpedia_application::{
    AdmitQuestionUseCase, AuditDatasetUseCase, DatasetVersionUseCase, QuestionStore,
    ValidateDatasetUseCase,
};
use cultpedia_infrastructure::{
    ConfigLoader, FileConfig, JsonCandidateFile, JsonManifestFile, NdjsonQuestionStore, Severity,
};
use cultpedia_presentation::{CandidateArgs, Cli, Command, ReportFormatter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    init_logging(cli.verbose, &config);
    info!("Starting cultpedia");

    if let Some(path) = cli.dataset {
        config.dataset.questions = path;
    }
    check_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }
    debug!("Dataset: {}", config.dataset.questions.display());

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // === Dependency Injection ===
    let store: Arc<dyn QuestionStore> =
        Arc::new(NdjsonQuestionStore::new(&config.dataset.questions));
    let dataset = config.dataset.questions.display().to_string();

    match command {
        Command::Validate => {
            let result = ValidateDatasetUseCase::new(store)
                .execute()
                .with_context(|| format!("failed to validate {dataset}"))?;
            print!("{}", ReportFormatter::dataset_validation(&result));
            Ok(exit_code(result.is_valid()))
        }
        Command::CheckDuplicates => {
            let audit = AuditDatasetUseCase::new(store)
                .duplicates()
                .with_context(|| format!("failed to audit {dataset}"))?;
            print!("{}", ReportFormatter::duplicates(&audit));
            Ok(exit_code(audit.is_clean()))
        }
        Command::CheckTranslations => {
            let audit = AuditDatasetUseCase::new(store)
                .translations()
                .with_context(|| format!("failed to audit {dataset}"))?;
            print!("{}", ReportFormatter::translations(&audit));
            Ok(exit_code(audit.is_clean()))
        }
        Command::CheckNew(candidate) => {
            let path = submission_path(&candidate, &config)?;
            let use_case = AdmitQuestionUseCase::new(store, Arc::new(JsonCandidateFile::new(&path)));
            let review = use_case
                .review()
                .with_context(|| format!("failed to check {}", path.display()))?;
            print!("{}", ReportFormatter::candidate_review(&review));
            Ok(exit_code(review.is_valid()))
        }
        Command::Preview { candidate, lang } => {
            let path = submission_path(&candidate, &config)?;
            let use_case = AdmitQuestionUseCase::new(store, Arc::new(JsonCandidateFile::new(&path)));
            let review = use_case
                .review()
                .with_context(|| format!("failed to check {}", path.display()))?;

            if !review.is_valid() {
                print!("{}", ReportFormatter::candidate_review(&review));
                return Ok(ExitCode::FAILURE);
            }

            print!("{}", ReportFormatter::preview(&review.question, lang));
            Ok(ExitCode::SUCCESS)
        }
        Command::Add { candidate, yes } => {
            let path = submission_path(&candidate, &config)?;
            let use_case = AdmitQuestionUseCase::new(store, Arc::new(JsonCandidateFile::new(&path)));
            let review = use_case
                .review()
                .with_context(|| format!("failed to check {}", path.display()))?;

            if !review.is_valid() {
                print!("{}", ReportFormatter::candidate_review(&review));
                return Ok(ExitCode::FAILURE);
            }

            print!("{}", ReportFormatter::admission_summary(&review.question));
            if !yes {
                println!("Nothing written. Re-run with --yes to append it to {dataset}.");
                return Ok(ExitCode::SUCCESS);
            }

            let outcome = use_case
                .admit(&review.question)
                .with_context(|| format!("failed to append to {dataset}"))?;
            print!("{}", ReportFormatter::admission(&outcome));
            Ok(exit_code(outcome.is_admitted()))
        }
        Command::Version => {
            let manifest = Arc::new(JsonManifestFile::new(&config.dataset.manifest));
            let version = DatasetVersionUseCase::new(manifest).execute();
            print!("{}", ReportFormatter::version(&version));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level, falling back to the config file
fn init_logging(verbose: u8, config: &FileConfig) {
    let filter = match verbose {
        0 => config
            .logging
            .level
            .as_deref()
            .and_then(|level| EnvFilter::try_new(level).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("config {}: {}", issue.field, issue.message),
            Severity::Error => eprintln!("config error in {}: {}", issue.field, issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("invalid configuration");
    }
    Ok(())
}

fn submission_path(candidate: &CandidateArgs, config: &FileConfig) -> Result<PathBuf> {
    config
        .dataset
        .submission_path(candidate.file.as_deref())
        .map_err(|issue| anyhow!("config error in {}: {}", issue.field, issue.message))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
