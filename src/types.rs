use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "docs";
pub const DEFAULT_OUTPUT_FILE: &str = "chunked_dataset.json";
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// One entry of the output dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub source: String,
    pub page: u32,
    pub chunk: String,
}

/// Text of a single PDF page. `index` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfPage {
    pub index: u32,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ChunkConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Skip unreadable PDFs instead of aborting the run.
    pub skip_invalid: bool,
    /// Accept `.PDF` and other casings of the suffix.
    pub case_insensitive: bool,
}

impl ChunkConfig {
    pub fn validate(&self) -> Result<()> {
        validate_chunk_params(self.chunk_size, self.chunk_overlap)
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            skip_invalid: false,
            case_insensitive: false,
        }
    }
}

pub(crate) fn validate_chunk_params(chunk_size: usize, chunk_overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(ChunkerError::Config {
            reason: "Chunk size must be greater than 0".to_string(),
        });
    }

    if chunk_overlap >= chunk_size {
        return Err(ChunkerError::Config {
            reason: format!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                chunk_overlap, chunk_size
            ),
        });
    }

    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct ChunkReport {
    pub output_file: PathBuf,
    pub files_processed: usize,
    pub files_skipped: Vec<String>,
    pub pages_processed: usize,
    pub total_chunks: usize,
}
