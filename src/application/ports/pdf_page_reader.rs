use crate::domain::TextBlock;

use super::FileLoaderError;

/// Structured access to a PDF: positioned text per page and page rasterization.
pub trait PdfPageReader: Send + Sync {
    /// Text blocks for every page, in page order.
    fn text_blocks(&self, data: &[u8]) -> Result<Vec<Vec<TextBlock>>, FileLoaderError>;

    /// Renders one zero-based page as an encoded PNG.
    fn render_page(
        &self,
        data: &[u8],
        page_index: usize,
        dpi: f32,
    ) -> Result<Vec<u8>, FileLoaderError>;

    /// Renders every page as encoded PNGs, in page order.
    fn render_all(&self, data: &[u8], dpi: f32) -> Result<Vec<Vec<u8>>, FileLoaderError>;
}
