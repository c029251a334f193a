/// Upgrades a legacy binary Word document to the DOCX container format.
pub trait DocumentConverter: Send + Sync {
    fn convert(&self, doc: &[u8]) -> Result<Vec<u8>, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("DOC conversion failed: could not run converter: {0}")]
    ToolUnavailable(String),
    #[error("DOC conversion failed: {0}")]
    ToolFailed(String),
    #[error("DOC conversion failed: no output produced")]
    NoOutput,
    #[error("DOC conversion failed: io error: {0}")]
    Io(#[from] std::io::Error),
}
