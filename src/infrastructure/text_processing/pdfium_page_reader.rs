use std::path::PathBuf;

use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::application::ports::{FileLoaderError, PdfPageReader};
use crate::domain::TextBlock;

const POINTS_PER_INCH: f32 = 72.0;

/// pdfium-backed page reader. Binds to `library_path` when given, otherwise to the
/// system pdfium library.
#[derive(Debug, Clone, Default)]
pub struct PdfiumPageReader {
    library_path: Option<PathBuf>,
}

impl PdfiumPageReader {
    pub fn new(library_path: Option<PathBuf>) -> Self {
        Self { library_path }
    }

    fn bind(&self) -> Result<Pdfium, FileLoaderError> {
        let bindings = match &self.library_path {
            Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)),
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("pdfium bind failed: {e}")))?;

        Ok(Pdfium::new(bindings))
    }
}

fn open<'a>(pdfium: &'a Pdfium, data: &'a [u8]) -> Result<PdfDocument<'a>, FileLoaderError> {
    pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("pdfium open failed: {e}")))
}

fn page_blocks(page: &PdfPage, index: usize) -> Result<Vec<TextBlock>, FileLoaderError> {
    let page_height = page.height().value;
    let text = page.text().map_err(|e| {
        FileLoaderError::ExtractionFailed(format!("page {index} text access failed: {e}"))
    })?;

    let blocks = text
        .segments()
        .iter()
        .map(|segment| {
            let bounds = segment.bounds();
            TextBlock::new(
                bounds.left().value,
                page_height - bounds.top().value,
                segment.text(),
            )
        })
        .collect();

    Ok(blocks)
}

fn render_png(page: &PdfPage, index: usize, dpi: f32) -> Result<Vec<u8>, FileLoaderError> {
    let width = (page.width().value * dpi / POINTS_PER_INCH) as i32;
    let height = (page.height().value * dpi / POINTS_PER_INCH) as i32;

    let bitmap = page
        .render_with_config(
            &PdfRenderConfig::new()
                .set_target_width(width)
                .set_target_height(height),
        )
        .map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("render page {index} failed: {e}"))
        })?;

    let dynamic_image = bitmap.as_image();
    let mut png_bytes: Vec<u8> = Vec::new();
    dynamic_image
        .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("PNG encode page {index} failed: {e}"))
        })?;

    Ok(png_bytes)
}

impl PdfPageReader for PdfiumPageReader {
    fn text_blocks(&self, data: &[u8]) -> Result<Vec<Vec<TextBlock>>, FileLoaderError> {
        let pdfium = self.bind()?;
        let doc = open(&pdfium, data)?;

        doc.pages()
            .iter()
            .enumerate()
            .map(|(index, page)| page_blocks(&page, index))
            .collect()
    }

    fn render_page(
        &self,
        data: &[u8],
        page_index: usize,
        dpi: f32,
    ) -> Result<Vec<u8>, FileLoaderError> {
        let pdfium = self.bind()?;
        let doc = open(&pdfium, data)?;

        let page = doc.pages().get(page_index as u16).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("page {page_index} access failed: {e}"))
        })?;

        render_png(&page, page_index, dpi)
    }

    fn render_all(&self, data: &[u8], dpi: f32) -> Result<Vec<Vec<u8>>, FileLoaderError> {
        let pdfium = self.bind()?;
        let doc = open(&pdfium, data)?;

        doc.pages()
            .iter()
            .enumerate()
            .map(|(index, page)| render_png(&page, index, dpi))
            .collect()
    }
}
