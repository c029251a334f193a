mod mock_recognizer;
mod tesseract_recognizer;

pub use mock_recognizer::MockTextRecognizer;
pub use tesseract_recognizer::TesseractRecognizer;
