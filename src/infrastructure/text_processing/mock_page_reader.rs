use std::sync::Mutex;

use crate::application::ports::{FileLoaderError, PdfPageReader};
use crate::domain::TextBlock;

/// Serves canned text blocks per page and records which pages were rendered.
/// With no pages configured it behaves like an unreadable PDF.
#[derive(Default)]
pub struct MockPdfPageReader {
    pages: Option<Vec<Vec<TextBlock>>>,
    text_layer: bool,
    rendered: Mutex<Vec<(usize, f32)>>,
}

impl MockPdfPageReader {
    pub fn with_pages(pages: Vec<Vec<TextBlock>>) -> Self {
        Self {
            pages: Some(pages),
            text_layer: true,
            rendered: Mutex::new(Vec::new()),
        }
    }

    /// Image-only PDF: text extraction fails but every page still renders.
    pub fn scanned(page_count: usize) -> Self {
        Self {
            pages: Some(vec![Vec::new(); page_count]),
            text_layer: false,
            rendered: Mutex::new(Vec::new()),
        }
    }

    pub fn unreadable() -> Self {
        Self::default()
    }

    /// Zero-based indices of every page rendered so far, in call order.
    pub fn rendered_pages(&self) -> Vec<usize> {
        self.renders().into_iter().map(|(index, _)| index).collect()
    }

    /// DPI requested for each render, in call order.
    pub fn render_dpis(&self) -> Vec<f32> {
        self.renders().into_iter().map(|(_, dpi)| dpi).collect()
    }

    fn renders(&self) -> Vec<(usize, f32)> {
        self.rendered.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn pages(&self) -> Result<&Vec<Vec<TextBlock>>, FileLoaderError> {
        self.pages
            .as_ref()
            .ok_or_else(|| FileLoaderError::ExtractionFailed("mock PDF is unreadable".to_string()))
    }
}

impl PdfPageReader for MockPdfPageReader {
    fn text_blocks(&self, _data: &[u8]) -> Result<Vec<Vec<TextBlock>>, FileLoaderError> {
        if !self.text_layer {
            return Err(FileLoaderError::ExtractionFailed(
                "mock PDF has no text layer".to_string(),
            ));
        }
        self.pages().cloned()
    }

    fn render_page(
        &self,
        _data: &[u8],
        page_index: usize,
        dpi: f32,
    ) -> Result<Vec<u8>, FileLoaderError> {
        if page_index >= self.pages()?.len() {
            return Err(FileLoaderError::ExtractionFailed(format!(
                "page {page_index} out of range"
            )));
        }
        if let Ok(mut rendered) = self.rendered.lock() {
            rendered.push((page_index, dpi));
        }
        Ok(format!("page-{page_index}").into_bytes())
    }

    fn render_all(&self, data: &[u8], dpi: f32) -> Result<Vec<Vec<u8>>, FileLoaderError> {
        (0..self.pages()?.len())
            .map(|index| self.render_page(data, index, dpi))
            .collect()
    }
}
