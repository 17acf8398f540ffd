//! In-memory adapters shared by use case tests.

use crate::ports::candidate_source::CandidateSource;
use crate::ports::manifest_reader::ManifestReader;
use crate::ports::question_store::{QuestionStore, StoreError};
use cultpedia_domain::{Manifest, Question};
use std::path::PathBuf;
use std::sync::Mutex;

const SAMPLE: &str = r#"{"kind":"question","slug":"SLUG","theme":{"slug":"science"},"qtype":"single_choice","difficulty":"intermediate","estimated_seconds":30,"points":2.0,"shuffle_answers":true,"i18n":{"fr":{"title":"Eau","stem":"Quelle est la formule de l'eau ?","explanation":"Une molécule d'eau contient deux atomes d'hydrogène et un d'oxygène."},"en":{"title":"Water","stem":"What is the chemical formula of water?","explanation":"A water molecule holds two hydrogen atoms and one oxygen atom."},"es":{"title":"Agua","stem":"¿Cuál es la fórmula del agua?","explanation":"Una molécula de agua tiene dos átomos de hidrógeno y uno de oxígeno."}},"answers":[{"slug":"h2o","is_correct":true,"i18n":{"fr":{"label":"H2O"},"en":{"label":"H2O"},"es":{"label":"H2O"}}},{"slug":"co2","is_correct":false,"i18n":{"fr":{"label":"CO2"},"en":{"label":"CO2"},"es":{"label":"CO2"}}},{"slug":"o2","is_correct":false,"i18n":{"fr":{"label":"O2"},"en":{"label":"O2"},"es":{"label":"O2"}}},{"slug":"h2o2","is_correct":false,"i18n":{"fr":{"label":"H2O2"},"en":{"label":"H2O2"},"es":{"label":"H2O2"}}}],"sources":["https://en.wikipedia.org/wiki/Water"]}"#;

/// A question passing the strict validator.
pub(crate) fn sample_question(slug: &str) -> Question {
    let mut question: Question = serde_json::from_str(SAMPLE).unwrap();
    question.slug = slug.to_string();
    question
}

fn io_error(path: &str) -> StoreError {
    StoreError::Io {
        path: PathBuf::from(path),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    }
}

#[derive(Default)]
pub(crate) struct InMemoryStore {
    pub questions: Mutex<Vec<Question>>,
}

impl InMemoryStore {
    pub fn with(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(questions),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl QuestionStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    fn append(&self, question: &Question) -> Result<(), StoreError> {
        self.questions.lock().unwrap().push(question.clone());
        Ok(())
    }
}

/// A store whose file is missing.
pub(crate) struct MissingStore;

impl QuestionStore for MissingStore {
    fn load(&self) -> Result<Vec<Question>, StoreError> {
        Err(io_error("questions.ndjson"))
    }

    fn append(&self, _question: &Question) -> Result<(), StoreError> {
        Err(io_error("questions.ndjson"))
    }
}

pub(crate) struct FixedCandidate(pub Question);

impl CandidateSource for FixedCandidate {
    fn load_candidate(&self) -> Result<Question, StoreError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct FixedManifest(pub Option<Manifest>);

impl ManifestReader for FixedManifest {
    fn read_manifest(&self) -> Result<Manifest, StoreError> {
        self.0.clone().ok_or_else(|| io_error("manifest.json"))
    }
}
