use crate::error::{ChunkerError, Result};
use crate::services::loader::{LopdfLoader, PdfLoader};
use crate::services::scanner::PdfScanner;
use crate::services::splitter::{RecursiveCharacterSplitter, TextSplitter};
use crate::types::{ChunkConfig, ChunkRecord, ChunkReport, PdfPage};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Runs a full pass over an input directory: list, extract, split, write.
pub struct DocumentChunker<L, S> {
    loader: L,
    splitter: S,
}

impl DocumentChunker<LopdfLoader, RecursiveCharacterSplitter> {
    pub fn from_config(config: &ChunkConfig) -> Result<Self> {
        let splitter = RecursiveCharacterSplitter::new(config.chunk_size, config.chunk_overlap)?;
        Ok(Self::new(LopdfLoader, splitter))
    }
}

impl<L: PdfLoader, S: TextSplitter> DocumentChunker<L, S> {
    pub fn new(loader: L, splitter: S) -> Self {
        Self { loader, splitter }
    }

    /// Chunks every PDF in `config.input_dir` and writes the dataset to
    /// `config.output_file`. Nothing is written if any step fails.
    pub async fn chunk_directory(&self, config: &ChunkConfig) -> Result<ChunkReport> {
        let (records, mut report) = self.collect_chunks(config).await?;

        Self::write_dataset(&config.output_file, &records).await?;
        report.output_file = config.output_file.clone();

        info!(
            "Wrote {} chunks from {} files to {}",
            report.total_chunks,
            report.files_processed,
            config.output_file.display()
        );

        Ok(report)
    }

    pub async fn collect_chunks(
        &self,
        config: &ChunkConfig,
    ) -> Result<(Vec<ChunkRecord>, ChunkReport)> {
        config.validate()?;

        let files = PdfScanner::list_pdfs(&config.input_dir, config.case_insensitive)?;
        let mut records = Vec::new();
        let mut report = ChunkReport::default();

        for (idx, path) in files.iter().enumerate() {
            let source = PdfScanner::source_name(path);
            info!("Processing file {}/{}: {}", idx + 1, files.len(), source);

            let pages = match self.load_pages(&source, path).await {
                Ok(pages) => pages,
                Err(e) if config.skip_invalid => {
                    warn!("Skipping {}: {}", source, e);
                    report.files_skipped.push(source);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let file_records = self.chunk_pages(&source, &pages);
            debug!(
                "{}: {} pages, {} chunks",
                source,
                pages.len(),
                file_records.len()
            );

            report.files_processed += 1;
            report.pages_processed += pages.len();
            records.extend(file_records);
        }

        report.total_chunks = records.len();
        Ok((records, report))
    }

    /// Splits each page and tags the pieces with their origin.
    pub fn chunk_pages(&self, source: &str, pages: &[PdfPage]) -> Vec<ChunkRecord> {
        pages
            .iter()
            .flat_map(|page| {
                self.splitter
                    .split_text(&page.text)
                    .into_iter()
                    .map(move |chunk| ChunkRecord {
                        source: source.to_string(),
                        page: page.index,
                        chunk,
                    })
            })
            .collect()
    }

    async fn load_pages(&self, source: &str, path: &Path) -> Result<Vec<PdfPage>> {
        let bytes = fs::read(path).await.map_err(|e| ChunkerError::PdfParse {
            path: source.to_string(),
            reason: format!("cannot read file: {}", e),
        })?;

        self.loader.extract_pages(source, &bytes)
    }

    /// Writes `records` as a pretty-printed JSON array. The data goes to a
    /// sibling temp file first and is renamed over `output_file`.
    pub async fn write_dataset(output_file: &Path, records: &[ChunkRecord]) -> Result<()> {
        let json_content = serde_json::to_string_pretty(records)?;
        let tmp_path = temp_path_for(output_file);

        if let Err(e) = fs::write(&tmp_path, json_content).await {
            return Err(ChunkerError::OutputWrite {
                path: output_file.display().to_string(),
                reason: e.to_string(),
            });
        }

        if let Err(e) = fs::rename(&tmp_path, output_file).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(ChunkerError::OutputWrite {
                path: output_file.display().to_string(),
                reason: e.to_string(),
            });
        }

        Ok(())
    }
}

fn temp_path_for(output_file: &Path) -> PathBuf {
    let mut name = OsString::from(output_file.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
