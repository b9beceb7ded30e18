mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use pdf_chunker::{ChunkConfig, ChunkReport, DocumentChunker};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the confirmation line
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.to_config();

    match run(&config).await {
        Ok(report) => {
            if !report.files_skipped.is_empty() {
                info!("Skipped {} unreadable files", report.files_skipped.len());
            }
            println!("✅ Chunks written to {}", report.output_file.display());
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &ChunkConfig) -> anyhow::Result<ChunkReport> {
    tokio::fs::create_dir_all(&config.input_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create input directory {}",
                config.input_dir.display()
            )
        })?;

    let chunker = DocumentChunker::from_config(config)?;
    let report = chunker.chunk_directory(config).await?;

    Ok(report)
}
