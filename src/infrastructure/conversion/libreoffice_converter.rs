use std::io::ErrorKind;
use std::process::Command;

use crate::application::ports::{ConversionError, DocumentConverter};

const SOURCE_NAME: &str = "source.doc";
const CONVERTED_NAME: &str = "source.docx";

/// Headless LibreOffice `.doc` -> `.docx` conversion. Source and output live in a
/// private temp directory that is removed when the call returns.
#[derive(Debug, Clone)]
pub struct LibreOfficeConverter {
    command: String,
}

impl LibreOfficeConverter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for LibreOfficeConverter {
    fn default() -> Self {
        Self::new("soffice")
    }
}

impl DocumentConverter for LibreOfficeConverter {
    fn convert(&self, doc: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let work_dir = tempfile::TempDir::new()?;
        let source_path = work_dir.path().join(SOURCE_NAME);
        std::fs::write(&source_path, doc)?;

        let output = Command::new(&self.command)
            .args(["--headless", "--convert-to", "docx", "--outdir"])
            .arg(work_dir.path())
            .arg(&source_path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ConversionError::ToolUnavailable(format!("{} not found on PATH", self.command))
                }
                _ => ConversionError::ToolUnavailable(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                status = %output.status,
                stderr = %stderr.trim(),
                "DOC to DOCX conversion failed"
            );
            return Err(ConversionError::ToolFailed(stderr.trim().to_string()));
        }

        let converted_path = work_dir.path().join(CONVERTED_NAME);
        if !converted_path.exists() {
            tracing::error!("DOC to DOCX conversion produced no output file");
            return Err(ConversionError::NoOutput);
        }

        Ok(std::fs::read(&converted_path)?)
    }
}
