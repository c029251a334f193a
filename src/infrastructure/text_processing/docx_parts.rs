use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::FileLoaderError;

pub(super) type DocxArchive<'a> = ZipArchive<Cursor<&'a [u8]>>;

const BODY_PART: &str = "word/document.xml";
const MEDIA_PREFIX: &str = "word/media/";
const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".bmp", ".gif", ".tiff"];

pub(super) fn open_archive(data: &[u8]) -> Result<DocxArchive<'_>, FileLoaderError> {
    ZipArchive::new(Cursor::new(data))
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a DOCX container: {e}")))
}

/// Non-empty top-level paragraphs of the document body.
pub(super) fn body_paragraphs(
    archive: &mut DocxArchive<'_>,
) -> Result<Vec<String>, FileLoaderError> {
    let xml = read_part(archive, BODY_PART)?;
    paragraphs(&xml)
}

/// Paragraphs of every header and footer part, section by section, header first.
pub(super) fn header_footer_paragraphs(
    archive: &mut DocxArchive<'_>,
) -> Result<Vec<String>, FileLoaderError> {
    let mut parts: Vec<(u32, u8, String)> = archive
        .file_names()
        .filter_map(|name| {
            let (rank, rest) = if let Some(rest) = name.strip_prefix("word/header") {
                (0, rest)
            } else if let Some(rest) = name.strip_prefix("word/footer") {
                (1, rest)
            } else {
                return None;
            };
            let number = rest.strip_suffix(".xml")?;
            let section = if number.is_empty() {
                0
            } else {
                number.parse().ok()?
            };
            Some((section, rank, name.to_string()))
        })
        .collect();
    parts.sort();

    let mut collected = Vec::new();
    for (_, _, name) in parts {
        let xml = read_part(archive, &name)?;
        collected.extend(paragraphs(&xml)?);
    }
    Ok(collected)
}

/// Raster images stored in the document's media folder, in archive order.
pub(super) fn media_images(
    archive: &mut DocxArchive<'_>,
) -> Result<Vec<(String, Vec<u8>)>, FileLoaderError> {
    let names: Vec<String> = archive
        .file_names()
        .filter(|name| is_media_image(name))
        .map(str::to_string)
        .collect();

    let mut images = Vec::with_capacity(names.len());
    for name in names {
        let mut entry = archive.by_name(&name).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open {name}: {e}"))
        })?;
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read {name}: {e}"))
        })?;
        images.push((name, bytes));
    }
    Ok(images)
}

pub(super) fn is_media_image(name: &str) -> bool {
    let lower = name.to_lowercase();
    name.starts_with(MEDIA_PREFIX) && IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn read_part(archive: &mut DocxArchive<'_>, name: &str) -> Result<String, FileLoaderError> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("missing part {name}: {e}")))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read {name}: {e}")))?;
    Ok(xml)
}

/// Trimmed, non-empty `w:p` texts. Paragraphs nested in tables or text boxes are
/// not top-level and are skipped.
fn paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut found = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut nesting = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nesting += 1,
                b"w:p" if nesting == 0 => current.clear(),
                b"w:t" if nesting == 0 => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) if nesting == 0 => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|err| {
                    FileLoaderError::ExtractionFailed(format!("XML text decoding error: {err}"))
                })?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => nesting = nesting.saturating_sub(1),
                b"w:t" => in_text = false,
                b"w:p" if nesting == 0 => {
                    let trimmed = current.trim();
                    if !trimmed.is_empty() {
                        found.push(trimmed.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "XML parsing error at {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(found)
}

