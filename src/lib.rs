//! # PDF Chunker Library
//!
//! Reads the PDF files in a folder, splits the text of every page into
//! overlapping fixed-size chunks and writes the chunks, tagged with their
//! source file and zero-based page number, to a JSON array.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pdf_chunker::{ChunkConfig, DocumentChunker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChunkConfig::default(); // docs/ -> chunked_dataset.json
//!
//!     let chunker = DocumentChunker::from_config(&config)?;
//!     let report = chunker.chunk_directory(&config).await?;
//!
//!     println!("Wrote {} chunks", report.total_chunks);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{ChunkerError, Result};
pub use services::{
    DocumentChunker, LopdfLoader, PdfLoader, PdfScanner, RecursiveCharacterSplitter,
    TextSplitter,
};
pub use types::{
    ChunkConfig, ChunkRecord, ChunkReport, PdfPage, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
