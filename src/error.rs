//! Validation errors raised while building a dataset or reading a predictions table.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("scores and labels differ in length: {scores} != {labels}")]
    LengthMismatch { scores: usize, labels: usize },

    #[error("invalid label `{label}' observed at sample {index}")]
    InvalidLabel { index: usize, label: i64 },

    #[error("non-finite score {score} at sample {index}")]
    NonFiniteScore { index: usize, score: f64 },

    #[error("invalid predictions table header: {0}")]
    InvalidHeader(String),

    #[error("no column called `{0}' found")]
    MissingColumn(&'static str),

    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, EvalError>;
