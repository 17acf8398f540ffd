//! Fixtures for store tests.

use cultpedia_domain::{Answer, AnswerLabel, Language, LocalizedContent, Question, ThemeRef};

fn labels(text: &str) -> std::collections::BTreeMap<String, AnswerLabel> {
    Language::ALL
        .iter()
        .map(|l| {
            (
                l.as_str().to_string(),
                AnswerLabel {
                    label: format!("{text} ({l})"),
                },
            )
        })
        .collect()
}

/// A question passing the strict validator.
pub(crate) fn sample_question(slug: &str) -> Question {
    let i18n = Language::ALL
        .iter()
        .map(|l| {
            (
                l.as_str().to_string(),
                LocalizedContent {
                    title: format!("Moon landing ({l})"),
                    stem: format!("In which year did Apollo 11 land? ({l})"),
                    explanation: format!("Apollo 11 landed on the Moon on 20 July 1969. ({l})"),
                },
            )
        })
        .collect();

    Question {
        kind: "question".to_string(),
        version: None,
        slug: slug.to_string(),
        theme: ThemeRef::new("history"),
        subthemes: vec![ThemeRef::new("space-race")],
        tags: Vec::new(),
        qtype: "single_choice".to_string(),
        difficulty: "expert".to_string(),
        estimated_seconds: 45,
        points: 2.5,
        shuffle_answers: false,
        i18n,
        answers: ["1969", "1967", "1971", "1965"]
            .iter()
            .enumerate()
            .map(|(i, year)| Answer {
                slug: format!("year-{year}"),
                is_correct: i == 0,
                i18n: labels(year),
            })
            .collect(),
        sources: vec!["https://en.wikipedia.org/wiki/Apollo_11".to_string()],
    }
}
