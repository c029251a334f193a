use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Echoes the uploaded bytes as UTF-8 unless a failure was scripted for the filename.
/// Records every filename it was asked to extract.
#[derive(Default)]
pub struct MockFileLoader {
    failures: HashMap<String, String>,
    seen: Mutex<Vec<String>>,
}

impl MockFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, filename: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert(filename.into(), reason.into());
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], doc: &Document) -> Result<String, FileLoaderError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(doc.filename.clone());
        }

        match self.failures.get(&doc.filename) {
            Some(reason) => Err(FileLoaderError::ExtractionFailed(reason.clone())),
            None => Ok(String::from_utf8_lossy(data).into_owned()),
        }
    }
}
