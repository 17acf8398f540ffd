//! Console report formatter for dataset checks

use colored::Colorize;
use cultpedia_application::{AdmissionOutcome, CandidateReview};
use cultpedia_domain::{
    DatasetValidation, DuplicateAudit, Language, Question, TranslationAudit, render_violations,
};

/// Formats validation results and question previews for console display
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format the outcome of whole-dataset validation
    pub fn dataset_validation(result: &DatasetValidation) -> String {
        if result.is_valid() {
            return format!(
                "{} ({} questions checked)\n",
                "✔ Dataset is valid".green().bold(),
                result.records()
            );
        }

        let mut output = format!("{}\n", "validation errors:".red().bold());
        for issue in result.issues() {
            output.push_str(&format!("  {} {}\n", "✗".red(), issue));
        }
        output.push_str(&format!(
            "\n{} structural, {} duplicate ({} questions checked)\n",
            result.structural_count(),
            result.duplicate_count(),
            result.records()
        ));
        output
    }

    /// Format the duplicate-slug audit
    pub fn duplicates(audit: &DuplicateAudit) -> String {
        match audit {
            DuplicateAudit::NoDuplicates => format!("{}\n", "No duplicates.".green()),
            DuplicateAudit::Found(reports) => {
                let mut output = format!("{}\n", "duplicates detected:".red().bold());
                for report in reports {
                    output.push_str(&format!("  - {}\n", report));
                }
                output
            }
        }
    }

    /// Format the translation-completeness audit
    pub fn translations(audit: &TranslationAudit) -> String {
        match audit {
            TranslationAudit::AllPresent => {
                format!("{}\n", "All translations present.".green())
            }
            TranslationAudit::Missing(reports) => {
                let mut output = format!("{}\n", "missing translations:".red().bold());
                for report in reports {
                    output.push_str(&format!("  - {}\n", report));
                }
                output
            }
        }
    }

    /// Format the strict validation result of a pending submission
    pub fn candidate_review(review: &CandidateReview) -> String {
        if review.is_valid() {
            return format!(
                "{} {}\n",
                "✔ New question is valid:".green().bold(),
                review.question.slug
            );
        }

        format!(
            "{}\n{}\n",
            "Validation failed".red().bold(),
            render_violations(&review.violations)
        )
    }

    /// Format the result of an admission attempt
    pub fn admission(outcome: &AdmissionOutcome) -> String {
        match outcome {
            AdmissionOutcome::Admitted { slug } => format!(
                "{} '{}'\n",
                "✔ Question added to dataset:".green().bold(),
                slug
            ),
            AdmissionOutcome::Rejected { slug, violations } => format!(
                "{} '{}'\n{}\n",
                "Question rejected:".red().bold(),
                slug,
                render_violations(violations)
            ),
        }
    }

    /// Summary shown before a submission is appended
    pub fn admission_summary(question: &Question) -> String {
        let mut output = Self::header("Add question to dataset");
        output.push('\n');
        output.push_str(&Self::field("Slug", &question.slug));
        output.push_str(&Self::field("Theme", &question.theme.slug));
        output.push_str(&Self::field("Difficulty", &question.difficulty));
        output.push_str(&Self::field("Points", &format!("{:.1}", question.points)));
        output.push_str(&Self::field("Type", &question.qtype));
        output.push_str(&Self::field(
            "Languages",
            &question.i18n.keys().cloned().collect::<Vec<_>>().join(", "),
        ));
        output.push_str(&Self::field(
            "Answers",
            &format!(
                "{} ({} correct)",
                question.answers.len(),
                question.correct_answer_count()
            ),
        ));
        output.push_str(&Self::field("Sources", &question.sources.len().to_string()));
        output.push_str(&Self::footer());
        output
    }

    /// Render a question in one language
    pub fn preview(question: &Question, language: Language) -> String {
        let mut output = Self::header(&format!("Preview ({})", language));
        output.push('\n');

        output.push_str(&Self::field("Slug", &question.slug));
        output.push_str(&Self::field("Theme", &question.theme.slug));
        if !question.subthemes.is_empty() {
            output.push_str(&Self::field("Subthemes", &Self::slugs(&question.subthemes)));
        }
        if !question.tags.is_empty() {
            output.push_str(&Self::field("Tags", &Self::slugs(&question.tags)));
        }
        output.push_str(&format!(
            "{} {} | {} {:.1} | {} {}\n",
            "Difficulty:".cyan().bold(),
            question.difficulty,
            "Points:".cyan().bold(),
            question.points,
            "Type:".cyan().bold(),
            question.qtype
        ));
        output.push_str(&Self::field(
            "Languages",
            &Language::ALL
                .iter()
                .map(|l| {
                    let mark = if question.has_language(*l) { "✓" } else { "✗" };
                    format!("{} {}", l, mark)
                })
                .collect::<Vec<_>>()
                .join("  "),
        ));

        output.push_str(&Self::section_header(&format!(
            "Title ({})",
            language.as_str().to_uppercase()
        )));
        match question.content(language) {
            Some(content) => {
                output.push_str(&format!("{}\n", content.title.bold()));
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    "Question:".cyan().bold(),
                    Self::indent(&content.stem, "  ")
                ));
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    "Explanation:".cyan().bold(),
                    Self::indent(&content.explanation, "  ")
                ));
            }
            None => {
                output.push_str(&format!(
                    "{}\n",
                    format!("No content for language {}", language).yellow()
                ));
            }
        }

        output.push_str(&format!("\n{}\n", "Answers:".cyan().bold()));
        for (index, answer) in question.answers.iter().enumerate() {
            let label = answer.label(language).unwrap_or(answer.slug.as_str());
            if answer.is_correct {
                output.push_str(&format!(
                    "  {}. [{}] {}\n",
                    index + 1,
                    "✓".green(),
                    label.green()
                ));
            } else {
                output.push_str(&format!("  {}. [ ] {}\n", index + 1, label));
            }
        }

        if !question.sources.is_empty() {
            output.push_str(&format!("\n{}\n", "Sources:".cyan().bold()));
            for source in &question.sources {
                output.push_str(&format!("  * {}\n", source));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the dataset version line
    pub fn version(version: &str) -> String {
        format!("{} {}\n", "Dataset version:".cyan().bold(), version)
    }

    fn field(name: &str, value: &str) -> String {
        format!("{} {}\n", format!("{}:", name).cyan().bold(), value)
    }

    fn slugs(refs: &[cultpedia_domain::ThemeRef]) -> String {
        refs.iter()
            .map(|r| r.slug.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
