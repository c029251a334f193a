use std::sync::Arc;

use crate::application::ports::{
    ExtractionStrategy, FileLoaderError, PdfPageReader, TextRecognizer,
};

pub const FULL_OCR_DPI: f32 = 200.0;

/// Last resort: rasterize every page and OCR each one independently.
pub struct FullOcrStrategy {
    reader: Arc<dyn PdfPageReader>,
    recognizer: Arc<dyn TextRecognizer>,
}

impl FullOcrStrategy {
    pub fn new(reader: Arc<dyn PdfPageReader>, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self { reader, recognizer }
    }
}

impl ExtractionStrategy for FullOcrStrategy {
    fn name(&self) -> &'static str {
        "full_ocr"
    }

    fn extract(&self, data: &[u8]) -> Result<Option<String>, FileLoaderError> {
        let images = self.reader.render_all(data, FULL_OCR_DPI)?;
        let page_count = images.len();

        let mut text = String::new();
        for image in images {
            text.push_str(&self.recognizer.recognize_text(&image)?);
            text.push('\n');
        }

        tracing::info!(page_count, "OCR used for whole PDF");
        Ok((!text.trim().is_empty()).then_some(text))
    }
}
