use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{DocumentConverter, FileLoader, FileLoaderError, TextRecognizer};
use crate::domain::{Document, DocumentFormat};

use super::blocking::{DEFAULT_EXTRACTION_TIMEOUT, run_blocking};
use super::docx_adapter::DocxAdapter;

/// `.doc` support: convert to DOCX, then run the DOCX extraction on the result.
pub struct LegacyDocAdapter {
    converter: Arc<dyn DocumentConverter>,
    recognizer: Arc<dyn TextRecognizer>,
    timeout: Duration,
}

impl LegacyDocAdapter {
    pub fn new(
        converter: Arc<dyn DocumentConverter>,
        recognizer: Arc<dyn TextRecognizer>,
    ) -> Self {
        Self {
            converter,
            recognizer,
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FileLoader for LegacyDocAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Doc {
            return Err(FileLoaderError::UnsupportedContentType(
                document.format.to_string(),
            ));
        }

        let converter = Arc::clone(&self.converter);
        let recognizer = Arc::clone(&self.recognizer);
        let data = data.to_vec();

        run_blocking(self.timeout, move || {
            let docx = converter.convert(&data)?;
            tracing::debug!(bytes = docx.len(), "DOC converted to DOCX");
            Ok(DocxAdapter::extract_blocking(&docx, recognizer.as_ref()))
        })
        .await
    }
}
