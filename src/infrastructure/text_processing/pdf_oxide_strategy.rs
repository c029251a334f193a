use std::io::Write;

use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionStrategy, FileLoaderError};

/// Second opinion from an independent PDF parser. No OCR.
#[derive(Default)]
pub struct PdfOxideStrategy;

impl PdfOxideStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ExtractionStrategy for PdfOxideStrategy {
    fn name(&self) -> &'static str {
        "pdf_oxide"
    }

    fn extract(&self, data: &[u8]) -> Result<Option<String>, FileLoaderError> {
        let mut temp_file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let mut doc = PdfDocument::open(temp_file.path())
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut text = String::new();
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(page_text) if !page_text.is_empty() => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(page_index, error = %e, "pdf_oxide skipped page");
                }
            }
        }

        Ok((!text.trim().is_empty()).then_some(text))
    }
}
