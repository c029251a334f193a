use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{BatchProgress, FileLoader, NoProgress};
use crate::domain::{BatchSummary, Document, ProcessingOutcome};

use super::DocumentProcessor;

pub struct BatchService<F: FileLoader> {
    processor: DocumentProcessor<F>,
    progress: Arc<dyn BatchProgress>,
}

impl<F: FileLoader> BatchService<F> {
    pub fn new(file_loader: Arc<F>) -> Self {
        Self {
            processor: DocumentProcessor::new(file_loader),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn BatchProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Processes every supported file in `input_dir` once, in filename order. Files whose
    /// artifact already exists in `output_dir` are skipped.
    #[tracing::instrument(
        skip(self),
        fields(input = %input_dir.display(), output = %output_dir.display())
    )]
    pub async fn process_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchSummary, BatchError> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| BatchError::CreateOutputDir {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let files = eligible_files(input_dir)
            .await
            .map_err(|source| BatchError::ReadInputDir {
                path: input_dir.to_path_buf(),
                source,
            })?;

        let mut summary = BatchSummary::default();
        let mut seen: HashSet<String> = HashSet::new();
        self.progress.started(files.len());

        for (document, path) in files {
            let filename = document.filename.as_str();
            let output_path = output_dir.join(document.output_file_name());
            let output_exists = tokio::fs::try_exists(&output_path).await.unwrap_or(false);
            if !seen.insert(filename.to_lowercase()) || output_exists {
                tracing::debug!(filename = %filename, "Skipping already processed file");
                summary.record_skipped(filename);
                self.progress.file_done(filename);
                continue;
            }

            match self.processor.process(&path, output_dir).await {
                ProcessingOutcome::Succeeded => summary.record_processed(),
                ProcessingOutcome::Skipped => summary.record_skipped(filename),
                ProcessingOutcome::Failed { reason } => {
                    tracing::warn!(filename = %filename, reason = %reason, "File failed");
                    summary.record_failed(filename, document.base_name(), reason);
                }
            }
            self.progress.file_done(filename);
        }
        self.progress.finished();

        tracing::info!(
            processed = summary.processed_count,
            skipped = summary.skipped_count,
            failed = summary.failed_files.len(),
            "Batch complete"
        );
        Ok(summary)
    }
}

async fn eligible_files(input_dir: &Path) -> io::Result<Vec<(Document, PathBuf)>> {
    let mut entries = tokio::fs::read_dir(input_dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();
        if let Some(document) = Document::from_filename(filename) {
            files.push((document, entry.path()));
        }
    }

    files.sort_by(|(a, _), (b, _)| a.filename.cmp(&b.filename));
    Ok(files)
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("cannot read input directory {}: {source}", path.display())]
    ReadInputDir { path: PathBuf, source: io::Error },
}
