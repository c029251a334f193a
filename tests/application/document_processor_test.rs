use std::sync::Arc;

use tempfile::TempDir;

use resume_text::application::services::DocumentProcessor;
use resume_text::domain::ProcessingOutcome;
use resume_text::infrastructure::text_processing::MockFileLoader;

#[tokio::test]
async fn given_text_file_when_processing_then_writes_sanitized_artifact() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("jane.txt");
    std::fs::write(&path, "Jane   Doe\n\nEngineer").unwrap();
    let processor = DocumentProcessor::new(Arc::new(MockFileLoader::new()));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(outcome, ProcessingOutcome::Succeeded);
    let written = std::fs::read_to_string(output.path().join("jane.txt")).unwrap();
    assert_eq!(written, "Jane Doe Engineer");
}

#[tokio::test]
async fn given_existing_artifact_when_processing_then_skips_without_extracting() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("jane.pdf");
    std::fs::write(&path, "new content").unwrap();
    std::fs::write(output.path().join("jane.txt"), "old content").unwrap();
    let loader = Arc::new(MockFileLoader::new());
    let processor = DocumentProcessor::new(Arc::clone(&loader));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(outcome, ProcessingOutcome::Skipped);
    assert!(loader.seen().is_empty());
    let kept = std::fs::read_to_string(output.path().join("jane.txt")).unwrap();
    assert_eq!(kept, "old content");
}

#[tokio::test]
async fn given_unsupported_extension_when_processing_then_fails_naming_extension() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("photo.PNG");
    std::fs::write(&path, "pixels").unwrap();
    let processor = DocumentProcessor::new(Arc::new(MockFileLoader::new()));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(outcome, ProcessingOutcome::failed("Unsupported file type: png"));
}

#[tokio::test]
async fn given_unsupported_file_with_existing_artifact_when_processing_then_skips() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("photo.png");
    std::fs::write(&path, "pixels").unwrap();
    std::fs::write(output.path().join("photo.txt"), "earlier run").unwrap();
    let processor = DocumentProcessor::new(Arc::new(MockFileLoader::new()));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(outcome, ProcessingOutcome::Skipped);
}

#[tokio::test]
async fn given_whitespace_only_text_when_processing_then_fails_with_no_content() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("blank.txt");
    std::fs::write(&path, "  \n\t ").unwrap();
    let processor = DocumentProcessor::new(Arc::new(MockFileLoader::new()));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(outcome, ProcessingOutcome::failed("No extractable content"));
    assert!(!output.path().join("blank.txt").exists());
}

#[tokio::test]
async fn given_extraction_error_when_processing_then_fails_with_error_message() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let path = input.path().join("broken.pdf");
    std::fs::write(&path, "%PDF").unwrap();
    let loader = MockFileLoader::new().failing_on("broken.pdf", "corrupt xref table");
    let processor = DocumentProcessor::new(Arc::new(loader));

    let outcome = processor.process(&path, output.path()).await;

    assert_eq!(
        outcome,
        ProcessingOutcome::failed("extraction failed: corrupt xref table")
    );
}

#[tokio::test]
async fn given_missing_file_when_processing_then_fails_with_read_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let processor = DocumentProcessor::new(Arc::new(MockFileLoader::new()));

    let outcome = processor
        .process(&input.path().join("gone.txt"), output.path())
        .await;

    match outcome {
        ProcessingOutcome::Failed { reason } => assert!(reason.starts_with("Failed to read file:")),
        other => panic!("expected failure, got {other}"),
    }
}
