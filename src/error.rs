use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not a valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a report produced by {0}")]
    NotAReport(String),

    #[error("This report does not contain any comparison")]
    NoComparisons,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, InterpreterError>;
