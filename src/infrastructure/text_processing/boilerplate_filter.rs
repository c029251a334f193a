const TEMPLATE_SIGNATURE: &str = "resume - styled html";
const PAGE_HEADER_PREFIXES: [&str; 2] = ["page ", "--- page"];
const URL_PREFIXES: [&str; 2] = ["https://", "http://"];
const MIN_ALNUM_RATIO: f64 = 0.4;

/// Drops lines that carry no resume content: blanks, template signatures, bare
/// URLs, page headers, image placeholders and separator/OCR noise. Surviving lines
/// are trimmed and re-joined with `\n`.
pub fn filter_boilerplate_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !is_boilerplate(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `line` is expected to be trimmed.
pub fn is_boilerplate(line: &str) -> bool {
    if line.is_empty() {
        return true;
    }

    let lower = line.to_lowercase();
    if lower.starts_with(TEMPLATE_SIGNATURE) {
        return true;
    }
    if URL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    if PAGE_HEADER_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    if is_image_placeholder(line) {
        return true;
    }

    alnum_ratio(line) < MIN_ALNUM_RATIO
}

// e.g. `<image: DeviceRGB, width: 441, height: 260, bpc: 8>`
fn is_image_placeholder(line: &str) -> bool {
    line.starts_with("<image:") && line.ends_with('>')
}

fn alnum_ratio(line: &str) -> f64 {
    let total = line.chars().count();
    if total == 0 {
        return 0.0;
    }
    let alnum = line.chars().filter(|c| c.is_alphanumeric()).count();
    alnum as f64 / total as f64
}
