mod libreoffice_converter;
mod mock_converter;

pub use libreoffice_converter::LibreOfficeConverter;
pub use mock_converter::MockDocumentConverter;
