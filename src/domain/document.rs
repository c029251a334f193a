use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub format: DocumentFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Text,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 4] = [Self::Pdf, Self::Docx, Self::Doc, Self::Text];

    /// Matches a bare extension without the leading dot, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        extension_of(filename).and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl Document {
    pub fn new(filename: String, format: DocumentFormat) -> Self {
        Self { filename, format }
    }

    /// Builds a document from its filename, or `None` when the extension is not supported.
    pub fn from_filename(filename: impl Into<String>) -> Option<Self> {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename)?;
        Some(Self { filename, format })
    }

    /// Filename with its final extension stripped.
    pub fn base_name(&self) -> &str {
        base_name_of(&self.filename)
    }

    /// Name of the text artifact this document produces.
    pub fn output_file_name(&self) -> String {
        output_file_name_for(&self.filename)
    }
}

/// Artifact name for any input filename, supported or not.
pub fn output_file_name_for(filename: &str) -> String {
    format!("{}.txt", base_name_of(filename))
}

pub(crate) fn extension_of(filename: &str) -> Option<&str> {
    Path::new(filename).extension().and_then(|e| e.to_str())
}

pub(crate) fn base_name_of(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}
