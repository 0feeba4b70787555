use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Required input not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CorpusResult<T> = Result<T, CorpusError>;
