use std::sync::Arc;

use resume_text::application::ports::{ConversionError, FileLoader, FileLoaderError};
use resume_text::domain::{Document, DocumentFormat};
use resume_text::infrastructure::conversion::MockDocumentConverter;
use resume_text::infrastructure::ocr::MockTextRecognizer;
use resume_text::infrastructure::text_processing::LegacyDocAdapter;

use crate::helpers::DocxFixture;

fn doc_document() -> Document {
    Document::new("resume.doc".to_string(), DocumentFormat::Doc)
}

#[tokio::test]
async fn given_convertible_doc_when_extracting_then_returns_text_of_converted_docx() {
    let converted = DocxFixture {
        body: vec!["Legacy resume", "Twenty years of COBOL"],
        ..Default::default()
    }
    .build();
    let adapter = LegacyDocAdapter::new(
        Arc::new(MockDocumentConverter::returning(converted)),
        Arc::new(MockTextRecognizer::failing()),
    );

    let text = adapter
        .extract_text(b"\xD0\xCF\x11\xE0", &doc_document())
        .await
        .unwrap();

    assert_eq!(text, "Legacy resume Twenty years of COBOL");
}

#[tokio::test]
async fn given_converter_failure_when_extracting_then_surfaces_conversion_error() {
    let adapter = LegacyDocAdapter::new(
        Arc::new(MockDocumentConverter::failing()),
        Arc::new(MockTextRecognizer::failing()),
    );

    let result = adapter
        .extract_text(b"\xD0\xCF\x11\xE0", &doc_document())
        .await;

    match result {
        Err(FileLoaderError::Conversion(ConversionError::NoOutput)) => {}
        other => panic!("expected conversion failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_conversion_failure_when_formatting_then_message_names_doc_conversion() {
    let error = FileLoaderError::from(ConversionError::ToolFailed("exit 1".to_string()));

    assert_eq!(error.to_string(), "DOC conversion failed: exit 1");
}
