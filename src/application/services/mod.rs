mod batch_service;
mod document_processor;
mod extraction_service;

pub use batch_service::{BatchError, BatchService};
pub use document_processor::DocumentProcessor;
pub use extraction_service::{ExtractedText, ExtractionError, ExtractionService, UploadedFile};
