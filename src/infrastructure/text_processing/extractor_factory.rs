use std::sync::Arc;

use crate::application::ports::{DocumentConverter, FileLoader, PdfPageReader, TextRecognizer};
use crate::domain::DocumentFormat;
use crate::infrastructure::conversion::LibreOfficeConverter;
use crate::infrastructure::ocr::TesseractRecognizer;
use crate::presentation::config::ExtractionSettings;

use super::composite_file_loader::CompositeFileLoader;
use super::docx_adapter::DocxAdapter;
use super::legacy_doc_adapter::LegacyDocAdapter;
use super::pdf_adapter::PdfAdapter;
use super::pdfium_page_reader::PdfiumPageReader;
use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Production loader: pdfium, tesseract and LibreOffice as configured.
    pub fn create(settings: &ExtractionSettings) -> CompositeFileLoader {
        let reader: Arc<dyn PdfPageReader> =
            Arc::new(PdfiumPageReader::new(settings.pdfium_library_path.clone()));
        let recognizer: Arc<dyn TextRecognizer> = Arc::new(TesseractRecognizer::new(
            settings.ocr.tesseract_cmd.as_str(),
            settings.ocr.language.as_str(),
        ));
        let converter: Arc<dyn DocumentConverter> = Arc::new(LibreOfficeConverter::new(
            settings.conversion.soffice_cmd.as_str(),
        ));

        tracing::info!(
            tesseract = %settings.ocr.tesseract_cmd,
            language = %settings.ocr.language,
            soffice = %settings.conversion.soffice_cmd,
            timeout_secs = settings.timeout_secs,
            "Building file loaders"
        );

        Self::with_capabilities(settings, reader, recognizer, converter)
    }

    /// Same wiring over caller-supplied capabilities.
    pub fn with_capabilities(
        settings: &ExtractionSettings,
        reader: Arc<dyn PdfPageReader>,
        recognizer: Arc<dyn TextRecognizer>,
        converter: Arc<dyn DocumentConverter>,
    ) -> CompositeFileLoader {
        let timeout = settings.timeout();

        let pdf: Arc<dyn FileLoader> =
            Arc::new(PdfAdapter::new(reader, Arc::clone(&recognizer)).with_timeout(timeout));
        let docx: Arc<dyn FileLoader> =
            Arc::new(DocxAdapter::new(Arc::clone(&recognizer)).with_timeout(timeout));
        let doc: Arc<dyn FileLoader> =
            Arc::new(LegacyDocAdapter::new(converter, recognizer).with_timeout(timeout));

        CompositeFileLoader::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, docx),
            (DocumentFormat::Doc, doc),
            (DocumentFormat::Text, Arc::new(PlainTextAdapter)),
        ])
    }
}
