use resume_text::application::ports::{RecognitionError, TextRecognizer};
use resume_text::infrastructure::ocr::TesseractRecognizer;

#[test]
fn given_bytes_that_are_not_an_image_when_recognizing_then_reports_decoding_failure() {
    let recognizer = TesseractRecognizer::default();

    let result = recognizer.recognize_text(b"not an image");

    assert!(matches!(result, Err(RecognitionError::DecodingFailed(_))));
}
