use clap::Parser;
use pdf_chunker::{
    ChunkConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_INPUT_DIR,
    DEFAULT_OUTPUT_FILE,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdf-chunk")]
#[command(about = "Split the text of PDF files into overlapping chunks and write them to JSON")]
#[command(version)]
pub struct Cli {
    /// Folder containing the PDF files (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Destination JSON file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Maximum chunk length in characters
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Characters repeated between consecutive chunks
    #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
    pub chunk_overlap: usize,

    /// Skip PDFs that cannot be parsed instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Also accept `.PDF` and other casings of the extension
    #[arg(long)]
    pub case_insensitive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> ChunkConfig {
        ChunkConfig {
            input_dir: self.input_dir.clone(),
            output_file: self.output.clone(),
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            skip_invalid: self.skip_invalid,
            case_insensitive: self.case_insensitive,
        }
    }
}
