use crate::error::{ChunkerError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const PDF_SUFFIX: &str = ".pdf";

pub struct PdfScanner;

impl PdfScanner {
    /// Lists the PDF files directly inside `input_dir`, sorted by file name.
    pub fn list_pdfs(input_dir: &Path, case_insensitive: bool) -> Result<Vec<PathBuf>> {
        if !input_dir.is_dir() {
            return Err(ChunkerError::InputNotFound {
                path: input_dir.display().to_string(),
            });
        }

        info!("Scanning {} for PDF files", input_dir.display());

        let mut pdfs = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::is_pdf_name(&name, case_insensitive) {
                pdfs.push(entry.into_path());
            } else {
                debug!("Ignoring {}", name);
            }
        }

        info!("Found {} PDF files", pdfs.len());
        Ok(pdfs)
    }

    pub fn is_pdf_name(name: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            name.to_lowercase().ends_with(PDF_SUFFIX)
        } else {
            name.ends_with(PDF_SUFFIX)
        }
    }

    /// File name without any directory prefix, as recorded in the dataset.
    pub fn source_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| PdfScanner::source_name(p)).collect()
    }

    #[test]
    fn test_suffix_matching() {
        assert!(PdfScanner::is_pdf_name("statute.pdf", false));
        assert!(!PdfScanner::is_pdf_name("statute.PDF", false));
        assert!(!PdfScanner::is_pdf_name("statute.pdf.bak", false));
        assert!(!PdfScanner::is_pdf_name("notes.txt", false));
        assert!(PdfScanner::is_pdf_name("statute.PDF", true));
        assert!(PdfScanner::is_pdf_name("statute.Pdf", true));
    }

    #[test]
    fn test_lists_sorted_top_level_pdfs_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();
        fs::write(dir.path().join("a.pdf"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join("UPPER.PDF"), b"").unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        fs::write(dir.path().join("nested.pdf").join("inner.pdf"), b"").unwrap();

        let strict = PdfScanner::list_pdfs(dir.path(), false).unwrap();
        assert_eq!(names(&strict), vec!["a.pdf", "b.pdf"]);

        let relaxed = PdfScanner::list_pdfs(dir.path(), true).unwrap();
        assert_eq!(names(&relaxed), vec!["UPPER.PDF", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_missing_directory_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("docs");

        let err = PdfScanner::list_pdfs(&missing, false).unwrap_err();
        assert!(matches!(err, ChunkerError::InputNotFound { .. }));
    }

    #[test]
    fn test_source_name_strips_directories() {
        let path = Path::new("docs").join("chapter39.pdf");
        assert_eq!(PdfScanner::source_name(&path), "chapter39.pdf");
    }
}
