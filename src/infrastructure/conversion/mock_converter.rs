use crate::application::ports::{ConversionError, DocumentConverter};

/// Hands back fixed DOCX bytes, or fails as if the converter were missing.
#[derive(Debug, Clone, Default)]
pub struct MockDocumentConverter {
    output: Option<Vec<u8>>,
}

impl MockDocumentConverter {
    pub fn returning(output: Vec<u8>) -> Self {
        Self {
            output: Some(output),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

impl DocumentConverter for MockDocumentConverter {
    fn convert(&self, _doc: &[u8]) -> Result<Vec<u8>, ConversionError> {
        self.output.clone().ok_or(ConversionError::NoOutput)
    }
}
