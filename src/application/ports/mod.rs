mod batch_progress;
mod document_converter;
mod extraction_strategy;
mod file_loader;
mod pdf_page_reader;
mod text_recognizer;

pub use batch_progress::{BatchProgress, NoProgress};
pub use document_converter::{ConversionError, DocumentConverter};
pub use extraction_strategy::ExtractionStrategy;
pub use file_loader::{FileLoader, FileLoaderError};
pub use pdf_page_reader::PdfPageReader;
pub use text_recognizer::{RecognitionError, TextRecognizer};
