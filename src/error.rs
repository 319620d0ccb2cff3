//! Error type shared by the quiz core and the browser host.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("question {index} has an empty prompt")]
    EmptyPrompt { index: usize },
    #[error("question {index} has {count} options, expected {expected}")]
    OptionCount {
        index: usize,
        count: usize,
        expected: usize,
    },
    #[error("question {index} repeats option {option:?}")]
    DuplicateOption { index: usize, option: String },
    #[error("question {index}: answer {answer:?} is not one of the options")]
    AnswerNotInOptions { index: usize, answer: String },
    #[error("question index {index} is out of range for a session of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("browser API unavailable: {0}")]
    Dom(String),
}

impl From<QuizError> for JsValue {
    fn from(err: QuizError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
