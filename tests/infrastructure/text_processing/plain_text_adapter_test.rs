use resume_text::application::ports::{FileLoader, FileLoaderError};
use resume_text::domain::{Document, DocumentFormat};
use resume_text::infrastructure::text_processing::PlainTextAdapter;

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let adapter = PlainTextAdapter;
    let document = Document::new("readme.txt".to_string(), DocumentFormat::Text);

    let result = adapter
        .extract_text(b"Hello, this is plain text.", &document)
        .await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_replaces_them() {
    let adapter = PlainTextAdapter;
    let bytes: &[u8] = &[b'J', b'o', 0xFF, b'e'];
    let document = Document::new("broken.txt".to_string(), DocumentFormat::Text);

    let result = adapter.extract_text(bytes, &document).await;

    assert_eq!(result.unwrap(), "Jo\u{FFFD}e");
}

#[tokio::test]
async fn given_non_text_format_when_extracting_then_returns_unsupported() {
    let adapter = PlainTextAdapter;
    let document = Document::new("file.pdf".to_string(), DocumentFormat::Pdf);

    let result = adapter.extract_text(b"some data", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
