use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{RecognitionError, TextRecognizer};

/// Returns canned text and counts how often it was asked.
#[derive(Debug, Default)]
pub struct MockTextRecognizer {
    text: Option<String>,
    calls: AtomicUsize,
}

impl MockTextRecognizer {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextRecognizer for MockTextRecognizer {
    fn recognize_text(&self, _image: &[u8]) -> Result<String, RecognitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| RecognitionError::EngineUnavailable("mock engine offline".to_string()))
    }
}
