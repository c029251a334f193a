mod blocking;
mod boilerplate_filter;
mod composite_file_loader;
mod docx_adapter;
mod docx_parts;
mod extractor_factory;
mod fallback_chain;
mod full_ocr_strategy;
mod layout_ocr_strategy;
mod legacy_doc_adapter;
mod mock_file_loader;
mod mock_page_reader;
mod pdf_adapter;
mod pdf_oxide_strategy;
mod pdfium_page_reader;
mod plain_text_adapter;
mod text_sanitizer;

pub use blocking::DEFAULT_EXTRACTION_TIMEOUT;
pub use boilerplate_filter::{filter_boilerplate_lines, is_boilerplate};
pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::{DocxAdapter, IMAGE_OCR_END, IMAGE_OCR_START, SUFFICIENT_PRIMARY_CHARS};
pub use extractor_factory::ExtractorFactory;
pub use fallback_chain::FallbackChain;
pub use full_ocr_strategy::{FULL_OCR_DPI, FullOcrStrategy};
pub use layout_ocr_strategy::{LayoutOcrStrategy, OCR_RENDER_DPI};
pub use legacy_doc_adapter::LegacyDocAdapter;
pub use mock_file_loader::MockFileLoader;
pub use mock_page_reader::MockPdfPageReader;
pub use pdf_adapter::PdfAdapter;
pub use pdf_oxide_strategy::PdfOxideStrategy;
pub use pdfium_page_reader::PdfiumPageReader;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::{clean_text, sanitize_text, strip_control_chars};
