use resume_text::application::ports::{ConversionError, DocumentConverter};
use resume_text::infrastructure::conversion::LibreOfficeConverter;

#[test]
fn given_missing_converter_binary_when_converting_then_reports_tool_unavailable() {
    let converter = LibreOfficeConverter::new("definitely-not-soffice-binary");

    let result = converter.convert(b"\xD0\xCF\x11\xE0 legacy doc");

    assert!(matches!(result, Err(ConversionError::ToolUnavailable(_))));
}
