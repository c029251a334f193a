use std::sync::Arc;

use resume_text::application::ports::{ExtractionStrategy, FileLoaderError};
use resume_text::domain::TextBlock;
use resume_text::infrastructure::ocr::MockTextRecognizer;
use resume_text::infrastructure::text_processing::{
    FULL_OCR_DPI, FallbackChain, FullOcrStrategy, LayoutOcrStrategy, MockPdfPageReader,
    OCR_RENDER_DPI,
};

const FAKE_PDF: &[u8] = b"%PDF-1.4 not really a pdf";

struct FixedTier(Option<&'static str>);

impl ExtractionStrategy for FixedTier {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn extract(&self, _data: &[u8]) -> Result<Option<String>, FileLoaderError> {
        Ok(self.0.map(str::to_string))
    }
}

fn tiers(
    reader: &Arc<MockPdfPageReader>,
    recognizer: &Arc<MockTextRecognizer>,
    second: FixedTier,
) -> FallbackChain {
    FallbackChain::new(vec![
        Box::new(LayoutOcrStrategy::new(reader.clone(), recognizer.clone())),
        Box::new(second),
        Box::new(FullOcrStrategy::new(reader.clone(), recognizer.clone())),
    ])
}

#[test]
fn given_empty_second_page_when_layout_extracting_then_ocr_text_takes_its_place() {
    let reader = Arc::new(MockPdfPageReader::with_pages(vec![
        vec![TextBlock::new(
            0.0,
            10.0,
            "Jane Doe, Principal Engineer building storage systems",
        )],
        Vec::new(),
    ]));
    let recognizer = Arc::new(MockTextRecognizer::returning("Certifications: CKA"));
    let strategy = LayoutOcrStrategy::new(reader.clone(), recognizer.clone());

    let text = strategy.extract(FAKE_PDF).unwrap().unwrap();

    assert_eq!(
        text,
        "Jane Doe, Principal Engineer building storage systems\nCertifications: CKA"
    );
    assert!(!text.contains("--- Page"));
    assert_eq!(reader.rendered_pages(), vec![1]);
    assert_eq!(reader.render_dpis(), vec![OCR_RENDER_DPI]);
    assert_eq!(recognizer.calls(), 1);
}

#[test]
fn given_scanned_pdf_when_layout_extracting_then_fails_without_rendering() {
    let reader = Arc::new(MockPdfPageReader::scanned(2));
    let recognizer = Arc::new(MockTextRecognizer::returning("unused"));
    let strategy = LayoutOcrStrategy::new(reader.clone(), recognizer.clone());

    let result = strategy.extract(FAKE_PDF);

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
    assert!(reader.rendered_pages().is_empty());
    assert_eq!(recognizer.calls(), 0);
}

#[test]
fn given_scanned_pdf_when_full_ocr_extracting_then_every_page_is_recognized() {
    let reader = Arc::new(MockPdfPageReader::scanned(3));
    let recognizer = Arc::new(MockTextRecognizer::returning("Scanned page"));
    let strategy = FullOcrStrategy::new(reader.clone(), recognizer.clone());

    let text = strategy.extract(FAKE_PDF).unwrap().unwrap();

    assert_eq!(text, "Scanned page\nScanned page\nScanned page\n");
    assert_eq!(reader.rendered_pages(), vec![0, 1, 2]);
    assert_eq!(reader.render_dpis(), vec![FULL_OCR_DPI; 3]);
    assert_eq!(recognizer.calls(), 3);
}

#[test]
fn given_second_tier_text_when_running_chain_then_full_ocr_never_runs() {
    let reader = Arc::new(MockPdfPageReader::scanned(2));
    let recognizer = Arc::new(MockTextRecognizer::returning("OCR text"));
    let chain = tiers(&reader, &recognizer, FixedTier(Some("Parsed by second tier")));

    let text = chain.run(FAKE_PDF);

    assert_eq!(text.as_deref(), Some("Parsed by second tier"));
    assert!(reader.rendered_pages().is_empty());
    assert_eq!(recognizer.calls(), 0);
}

#[test]
fn given_first_two_tiers_empty_when_running_chain_then_full_ocr_supplies_text() {
    let reader = Arc::new(MockPdfPageReader::scanned(2));
    let recognizer = Arc::new(MockTextRecognizer::returning("OCR text"));
    let chain = tiers(&reader, &recognizer, FixedTier(None));

    let text = chain.run(FAKE_PDF);

    assert_eq!(text.as_deref(), Some("OCR text\nOCR text\n"));
    assert_eq!(reader.render_dpis(), vec![FULL_OCR_DPI; 2]);
    assert_eq!(recognizer.calls(), 2);
}
