use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError, PdfPageReader, TextRecognizer};
use crate::domain::{Document, DocumentFormat};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::fallback_chain::FallbackChain;
use super::full_ocr_strategy::FullOcrStrategy;
use super::layout_ocr_strategy::LayoutOcrStrategy;
use super::pdf_oxide_strategy::PdfOxideStrategy;
use super::text_sanitizer::sanitize_text;

pub struct PdfAdapter {
    chain: Arc<FallbackChain>,
    timeout: Duration,
}

impl PdfAdapter {
    /// Layout + targeted OCR, then pdf_oxide, then full-document OCR.
    pub fn new(reader: Arc<dyn PdfPageReader>, recognizer: Arc<dyn TextRecognizer>) -> Self {
        let chain = FallbackChain::new(vec![
            Box::new(LayoutOcrStrategy::new(
                Arc::clone(&reader),
                Arc::clone(&recognizer),
            )),
            Box::new(PdfOxideStrategy::new()),
            Box::new(FullOcrStrategy::new(reader, recognizer)),
        ]);
        Self::with_chain(chain)
    }

    pub fn with_chain(chain: FallbackChain) -> Self {
        Self {
            chain: Arc::new(chain),
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.format.to_string(),
            ));
        }

        let chain = Arc::clone(&self.chain);
        let data = data.to_vec();

        let text = run_blocking(self.timeout, move || Ok(chain.run(&data))).await?;

        match text {
            Some(text) => {
                let sanitized = sanitize_text(&text);
                tracing::info!(chars = sanitized.len(), "PDF text extraction complete");
                Ok(sanitized)
            }
            None => {
                tracing::warn!("All PDF extraction tiers came back empty");
                Ok(String::new())
            }
        }
    }
}
