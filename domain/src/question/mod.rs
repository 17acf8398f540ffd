//! Question records: the entities stored one per line in the dataset.

pub mod entities;
pub mod value_objects;

pub use entities::{
    ANSWER_COUNT, Answer, AnswerLabel, LocalizedContent, QUESTION_KIND, Question, ThemeRef,
};
pub use value_objects::{Difficulty, Language, QuestionType};
