use resume_text::domain::{Document, DocumentFormat, output_file_name_for};

#[test]
fn given_uppercase_extension_when_resolving_format_then_matches_case_insensitively() {
    assert_eq!(
        DocumentFormat::from_filename("CV.PDF"),
        Some(DocumentFormat::Pdf)
    );
    assert_eq!(
        DocumentFormat::from_filename("cv.Docx"),
        Some(DocumentFormat::Docx)
    );
}

#[test]
fn given_unknown_extension_when_building_document_then_returns_none() {
    assert!(Document::from_filename("resume.xyz").is_none());
    assert!(Document::from_filename("no_extension").is_none());
}

#[test]
fn given_document_when_naming_output_then_strips_only_final_extension() {
    let document = Document::from_filename("jane.doe.resume.docx").unwrap();

    assert_eq!(document.base_name(), "jane.doe.resume");
    assert_eq!(document.output_file_name(), "jane.doe.resume.txt");
}

#[test]
fn given_unsupported_filename_when_naming_output_then_still_uses_base_name() {
    assert_eq!(output_file_name_for("photo.PNG"), "photo.txt");
    assert_eq!(
        output_file_name_for("jane.doe.resume.docx"),
        Document::from_filename("jane.doe.resume.docx")
            .unwrap()
            .output_file_name()
    );
}

#[test]
fn given_every_format_when_round_tripping_extension_then_resolves_to_itself() {
    for format in DocumentFormat::ALL {
        assert_eq!(DocumentFormat::from_extension(format.extension()), Some(format));
    }
}
