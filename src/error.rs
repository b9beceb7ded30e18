use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory listing failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Input directory not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to parse PDF {path}: {reason}")]
    PdfParse { path: String, reason: String },

    #[error("Failed to write output {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("Chunk configuration error: {reason}")]
    Config { reason: String },
}

pub type Result<T> = std::result::Result<T, ChunkerError>;
