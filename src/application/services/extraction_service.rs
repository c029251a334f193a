use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::Document;
use crate::infrastructure::text_processing::clean_text;

pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

pub struct ExtractedText {
    pub filename: String,
    pub full_text: String,
    pub error: Option<String>,
}

/// Extraction for uploaded files. The request is rejected as a whole only when it is
/// empty or names an unsupported file; extraction failures stay with their file.
pub struct ExtractionService<F: FileLoader> {
    file_loader: Arc<F>,
}

impl<F: FileLoader> ExtractionService<F> {
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    pub async fn extract_all(
        &self,
        files: Vec<UploadedFile>,
    ) -> Result<Vec<ExtractedText>, ExtractionError> {
        if files.is_empty() {
            return Err(ExtractionError::NoFiles);
        }

        let mut documents = Vec::with_capacity(files.len());
        for file in files {
            let document = Document::from_filename(file.filename.as_str())
                .ok_or_else(|| ExtractionError::UnsupportedFileType(file.filename.clone()))?;
            documents.push((document, file.data));
        }

        let mut results = Vec::with_capacity(documents.len());
        for (document, data) in documents {
            let result = match self.file_loader.extract_text(&data, &document).await {
                Ok(text) => ExtractedText {
                    full_text: clean_text(&text),
                    filename: document.filename,
                    error: None,
                },
                Err(e) => {
                    tracing::warn!(
                        filename = %document.filename,
                        error = %e,
                        "Upload extraction failed"
                    );
                    ExtractedText {
                        error: Some(format!("Failed to process {}: {e}", document.filename)),
                        filename: document.filename,
                        full_text: String::new(),
                    }
                }
            };
            results.push(result);
        }

        Ok(results)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("No files uploaded")]
    NoFiles,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
}
