use std::io::{ErrorKind, Write};
use std::process::Command;

use image::ImageFormat;

use crate::application::ports::{RecognitionError, TextRecognizer};

/// OCR through the `tesseract` command-line tool. Images are converted to
/// grayscale before recognition.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    command: String,
    language: String,
}

impl TesseractRecognizer {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }

    fn grayscale_png(image: &[u8]) -> Result<Vec<u8>, RecognitionError> {
        let decoded = image::load_from_memory(image)
            .map_err(|e| RecognitionError::DecodingFailed(e.to_string()))?;

        let mut png_bytes: Vec<u8> = Vec::new();
        decoded
            .grayscale()
            .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| RecognitionError::DecodingFailed(format!("PNG encode failed: {e}")))?;

        Ok(png_bytes)
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize_text(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let png_bytes = Self::grayscale_png(image)?;

        let mut temp_file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .map_err(|e| RecognitionError::RecognitionFailed(format!("temp file: {e}")))?;
        temp_file
            .write_all(&png_bytes)
            .map_err(|e| RecognitionError::RecognitionFailed(format!("temp file: {e}")))?;

        let output = Command::new(&self.command)
            .arg(temp_file.path())
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RecognitionError::EngineUnavailable(format!(
                    "{} not found on PATH",
                    self.command
                )),
                _ => RecognitionError::EngineUnavailable(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::RecognitionFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
