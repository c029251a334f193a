use std::io::{Read, Write};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dotext::MsDoc;

use crate::application::ports::{FileLoader, FileLoaderError, TextRecognizer};
use crate::domain::{Document, DocumentFormat};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::docx_parts::{
    DocxArchive, body_paragraphs, header_footer_paragraphs, media_images, open_archive,
};
use super::text_sanitizer::sanitize_text;

/// Primary extraction longer than this is accepted without consulting other sources.
pub const SUFFICIENT_PRIMARY_CHARS: usize = 500;

pub const IMAGE_OCR_START: &str = "[Embedded image OCR text start]";
pub const IMAGE_OCR_END: &str = "[Embedded image OCR text end]";

pub struct DocxAdapter {
    recognizer: Arc<dyn TextRecognizer>,
    timeout: Duration,
}

impl DocxAdapter {
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            recognizer,
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Never fails: an unreadable container yields an empty string.
    pub fn extract_blocking(data: &[u8], recognizer: &dyn TextRecognizer) -> String {
        match primary_text(data) {
            Ok(text) if text.trim().chars().count() > SUFFICIENT_PRIMARY_CHARS => {
                return sanitize_text(&text);
            }
            Ok(_) => tracing::debug!("Primary DOCX text too short, assembling from parts"),
            Err(e) => tracing::warn!(error = %e, "Primary DOCX extraction failed"),
        }

        let mut archive = match open_archive(data) {
            Ok(archive) => archive,
            Err(e) => {
                tracing::error!(error = %e, "DOCX extraction failed");
                return String::new();
            }
        };

        let mut parts: Vec<String> = Vec::new();

        match header_footer_paragraphs(&mut archive) {
            Ok(lines) if !lines.is_empty() => parts.push(lines.join("\n")),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not extract headers/footers"),
        }

        match embedded_image_text(&mut archive, recognizer) {
            Ok(blocks) if !blocks.is_empty() => parts.push(blocks.join("\n\n")),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not OCR embedded images"),
        }

        match body_paragraphs(&mut archive) {
            Ok(lines) if !lines.is_empty() => parts.push(lines.join("\n")),
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Could not extract body paragraphs"),
        }

        sanitize_text(&parts.join("\n\n"))
    }
}

/// Whole-document text from dotext, which needs a file path.
fn primary_text(data: &[u8]) -> Result<String, FileLoaderError> {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".docx")
        .tempfile()
        .map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;
    temp_file.write_all(data).map_err(|e| {
        FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
    })?;

    let mut text = String::new();
    dotext::Docx::open(temp_file.path())
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?
        .read_to_string(&mut text)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read DOCX: {e}")))?;

    Ok(text)
}

fn embedded_image_text(
    archive: &mut DocxArchive<'_>,
    recognizer: &dyn TextRecognizer,
) -> Result<Vec<String>, FileLoaderError> {
    let mut blocks = Vec::new();
    for (name, bytes) in media_images(archive)? {
        let text = recognizer.recognize_text(&bytes)?;
        if text.trim().is_empty() {
            tracing::debug!(image = %name, "Embedded image carried no text");
            continue;
        }
        blocks.push(format!("{IMAGE_OCR_START}\n{text}\n{IMAGE_OCR_END}"));
    }
    Ok(blocks)
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.format.to_string(),
            ));
        }

        let recognizer = Arc::clone(&self.recognizer);
        let data = data.to_vec();

        let text = run_blocking(self.timeout, move || {
            Ok(Self::extract_blocking(&data, recognizer.as_ref()))
        })
        .await?;

        tracing::info!(chars = text.len(), "DOCX text extraction complete");
        Ok(text)
    }
}
