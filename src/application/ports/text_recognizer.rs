/// OCR capability over encoded raster images (PNG, JPEG, ...).
pub trait TextRecognizer: Send + Sync {
    fn recognize_text(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("image decoding failed: {0}")]
    DecodingFailed(String),
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
}
