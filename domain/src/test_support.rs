//! Fixtures shared by the unit tests of this crate.

use crate::question::{Answer, AnswerLabel, Language, LocalizedContent, Question, ThemeRef};
use std::collections::BTreeMap;

fn content(lang: Language) -> LocalizedContent {
    let (title, stem, explanation) = match lang {
        Language::Fr => (
            "Capitale de la France",
            "Quelle est la capitale de la France ?",
            "Paris est la capitale de la France depuis le Moyen Âge.",
        ),
        Language::En => (
            "Capital of France",
            "What is the capital of France?",
            "Paris has been the capital of France since the Middle Ages.",
        ),
        Language::Es => (
            "Capital de Francia",
            "¿Cuál es la capital de Francia?",
            "París es la capital de Francia desde la Edad Media.",
        ),
    };
    LocalizedContent {
        title: title.to_string(),
        stem: stem.to_string(),
        explanation: explanation.to_string(),
    }
}

fn answer(slug: &str, label: &str, is_correct: bool) -> Answer {
    let i18n = Language::ALL
        .iter()
        .map(|l| {
            (
                l.as_str().to_string(),
                AnswerLabel {
                    label: label.to_string(),
                },
            )
        })
        .collect();
    Answer {
        slug: slug.to_string(),
        is_correct,
        i18n,
    }
}

/// A question that passes both the structural and the strict validator.
pub(crate) fn valid_question(slug: &str) -> Question {
    let i18n: BTreeMap<_, _> = Language::ALL
        .iter()
        .map(|l| (l.as_str().to_string(), content(*l)))
        .collect();
    Question {
        kind: "question".to_string(),
        version: Some("1.0.0".to_string()),
        slug: slug.to_string(),
        theme: ThemeRef::new("geography"),
        subthemes: vec![ThemeRef::new("capitals")],
        tags: vec![ThemeRef::new("europe")],
        qtype: "single_choice".to_string(),
        difficulty: "beginner".to_string(),
        estimated_seconds: 20,
        points: 1.0,
        shuffle_answers: true,
        i18n,
        answers: vec![
            answer("paris", "Paris", true),
            answer("lyon", "Lyon", false),
            answer("marseille", "Marseille", false),
            answer("toulouse", "Toulouse", false),
        ],
        sources: vec!["https://en.wikipedia.org/wiki/Paris".to_string()],
    }
}
