use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Input file {path} is missing required column(s): {}", .missing.join(", "))]
    SchemaError { path: String, missing: Vec<String> },

    #[error("Label store {path} is corrupt: {reason}")]
    StoreCorruptError { path: String, reason: String },

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, LabelerError>;
