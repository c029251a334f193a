use std::sync::Arc;

use resume_text::application::ports::{FileLoader, FileLoaderError};
use resume_text::domain::{Document, DocumentFormat, TextBlock};
use resume_text::infrastructure::ocr::MockTextRecognizer;
use resume_text::infrastructure::text_processing::{
    CompositeFileLoader, MockPdfPageReader, PdfAdapter, PlainTextAdapter,
};

fn loader() -> CompositeFileLoader {
    let reader = Arc::new(MockPdfPageReader::with_pages(vec![vec![TextBlock::new(
        0.0,
        0.0,
        "Structured text from the first page of a resume PDF",
    )]]));
    let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(
        reader,
        Arc::new(MockTextRecognizer::failing()),
    ));
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    CompositeFileLoader::new(vec![
        (DocumentFormat::Pdf, pdf_adapter),
        (DocumentFormat::Text, text_adapter),
    ])
}

#[tokio::test]
async fn given_pdf_document_when_loading_then_delegates_to_pdf_adapter() {
    let document = Document::new("sample.pdf".to_string(), DocumentFormat::Pdf);

    let result = loader().extract_text(b"%PDF", &document).await;

    assert_eq!(
        result.unwrap(),
        "Structured text from the first page of a resume PDF"
    );
}

#[tokio::test]
async fn given_text_document_when_loading_then_delegates_to_text_adapter() {
    let document = Document::new("readme.txt".to_string(), DocumentFormat::Text);

    let result = loader().extract_text(b"Hello plain text", &document).await;

    assert_eq!(result.unwrap(), "Hello plain text");
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_returns_unsupported() {
    let document = Document::new("legacy.doc".to_string(), DocumentFormat::Doc);

    let result = loader().extract_text(b"doc bytes", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(ref format)) if format == "doc"
    ));
}
