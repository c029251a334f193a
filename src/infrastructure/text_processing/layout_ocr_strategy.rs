use std::sync::Arc;

use crate::application::ports::{
    ExtractionStrategy, FileLoaderError, PdfPageReader, TextRecognizer,
};
use crate::domain::TextBlock;

use super::boilerplate_filter::filter_boilerplate_lines;
use super::text_sanitizer::strip_control_chars;

pub const OCR_RENDER_DPI: f32 = 300.0;
const FIRST_PAGE_MIN_CHARS: usize = 50;
const FIRST_PAGE_ALPHA_WINDOW: usize = 50;

/// Structured text in reading order, with OCR substituted for the first page when
/// its text looks unusable and for any page with no text at all.
pub struct LayoutOcrStrategy {
    reader: Arc<dyn PdfPageReader>,
    recognizer: Arc<dyn TextRecognizer>,
}

impl LayoutOcrStrategy {
    pub fn new(reader: Arc<dyn PdfPageReader>, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { reader, recognizer }
    }

    fn ocr_page(&self, data: &[u8], page_index: usize) -> Result<String, FileLoaderError> {
        let image = self.reader.render_page(data, page_index, OCR_RENDER_DPI)?;
        Ok(self.recognizer.recognize_text(&image)?)
    }
}

impl ExtractionStrategy for LayoutOcrStrategy {
    fn name(&self) -> &'static str {
        "layout_ocr"
    }

    fn extract(&self, data: &[u8]) -> Result<Option<String>, FileLoaderError> {
        let pages = self.reader.text_blocks(data)?;
        let mut text = String::new();

        for (page_index, blocks) in pages.into_iter().enumerate() {
            let page_number = page_index + 1;
            let mut page_text = join_blocks(blocks);

            if page_index == 0 && first_page_looks_unusable(&page_text) {
                tracing::debug!("First page text unusable, substituting OCR");
                page_text = self.ocr_page(data, page_index)?;
            }

            if !page_text.trim().is_empty() {
                text.push_str(&format!("\n--- Page {page_number} ---\n{page_text}"));
            } else {
                let ocr_text = self.ocr_page(data, page_index)?;
                text.push_str(&format!("\n--- Page {page_number} OCR Text ---\n{ocr_text}\n"));
            }
        }

        let filtered = filter_boilerplate_lines(&strip_control_chars(&text));
        Ok((!filtered.trim().is_empty()).then_some(filtered))
    }
}

fn join_blocks(mut blocks: Vec<TextBlock>) -> String {
    blocks.sort_by(TextBlock::reading_order);

    let mut page_text = String::new();
    for block in blocks {
        let trimmed = block.text.trim();
        if !trimmed.is_empty() {
            page_text.push_str(trimmed);
            page_text.push('\n');
        }
    }
    page_text
}

fn first_page_looks_unusable(page_text: &str) -> bool {
    page_text.trim().chars().count() < FIRST_PAGE_MIN_CHARS
        || !page_text
            .chars()
            .take(FIRST_PAGE_ALPHA_WINDOW)
            .any(char::is_alphabetic)
}
