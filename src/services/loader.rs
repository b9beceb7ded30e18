use crate::error::{ChunkerError, Result};
use crate::types::PdfPage;
use lopdf::Document;
use tracing::debug;

/// Turns the raw bytes of a PDF into its pages, in page order.
pub trait PdfLoader {
    /// `source` is only used to label errors.
    fn extract_pages(&self, source: &str, bytes: &[u8]) -> Result<Vec<PdfPage>>;
}

/// Page-by-page text extraction backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfLoader;

impl PdfLoader for LopdfLoader {
    fn extract_pages(&self, source: &str, bytes: &[u8]) -> Result<Vec<PdfPage>> {
        let doc = Document::load_mem(bytes).map_err(|e| ChunkerError::PdfParse {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = doc.get_pages().into_keys().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        // lopdf numbers pages from 1
        for page_number in page_numbers {
            let text = doc
                .extract_text(&[page_number])
                .map_err(|e| ChunkerError::PdfParse {
                    path: source.to_string(),
                    reason: format!("page {}: {}", page_number, e),
                })?;

            pages.push(PdfPage {
                index: page_number.saturating_sub(1),
                text,
            });
        }

        debug!("Extracted {} pages from {}", pages.len(), source);
        Ok(pages)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one text line per page.
    pub fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_are_zero_indexed_in_order() {
        let bytes = fixtures::pdf_with_pages(&["First page", "Second page", "Third page"]);
        let pages = LopdfLoader.extract_pages("statute.pdf", &bytes).unwrap();

        assert_eq!(pages.len(), 3);
        assert_eq!(
            pages.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(pages[0].text.contains("First"));
        assert!(pages[1].text.contains("Second"));
        assert!(pages[2].text.contains("Third"));
    }

    #[test]
    fn test_garbage_bytes_fail_with_parse_error() {
        let err = LopdfLoader
            .extract_pages("broken.pdf", b"this is not a pdf")
            .unwrap_err();

        match err {
            ChunkerError::PdfParse { path, .. } => assert_eq!(path, "broken.pdf"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
