use std::path::Path;
use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::{Document, ProcessingOutcome, output_file_name_for};
use crate::infrastructure::text_processing::sanitize_text;

/// Turns one input file into one `<base>.txt` artifact. Every failure is reported
/// as an outcome, never as an error.
pub struct DocumentProcessor<F: FileLoader> {
    file_loader: Arc<F>,
}

impl<F: FileLoader> DocumentProcessor<F> {
    pub fn new(file_loader: Arc<F>) -> Self {
        Self { file_loader }
    }

    #[tracing::instrument(skip(self, output_dir), fields(path = %path.display()))]
    pub async fn process(&self, path: &Path, output_dir: &Path) -> ProcessingOutcome {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output_path = output_dir.join(output_file_name_for(&filename));
        if tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
            tracing::debug!(output = %output_path.display(), "Output already exists");
            return ProcessingOutcome::Skipped;
        }

        let Some(document) = Document::from_filename(filename.as_str()) else {
            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            return ProcessingOutcome::failed(format!("Unsupported file type: {extension}"));
        };

        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => return ProcessingOutcome::failed(format!("Failed to read file: {e}")),
        };

        let text = match self.file_loader.extract_text(&data, &document).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Extraction failed");
                return ProcessingOutcome::failed(e.to_string());
            }
        };

        if text.trim().is_empty() {
            return ProcessingOutcome::failed("No extractable content");
        }

        if let Err(e) = tokio::fs::write(&output_path, sanitize_text(&text)).await {
            tracing::error!(error = %e, output = %output_path.display(), "Failed to write output");
            return ProcessingOutcome::failed(format!("Failed to write output TXT: {e}"));
        }

        tracing::info!(output = %output_path.display(), "Text artifact written");
        ProcessingOutcome::Succeeded
    }
}
