use async_trait::async_trait;

use crate::domain::Document;

use super::{ConversionError, RecognitionError};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out after {0}s")]
    TimedOut(u64),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}
