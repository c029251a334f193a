use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static LINE_BREAKS_AND_TABS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n\r\t]+").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Flattens line breaks and tabs into spaces and collapses whitespace runs.
/// Used on text returned by the upload endpoint.
pub fn clean_text(text: &str) -> String {
    let flattened = LINE_BREAKS_AND_TABS.replace_all(text, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&flattened, " ");
    collapsed.trim().to_string()
}

/// Collapses every whitespace run, including single newlines, to one space.
pub fn sanitize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keeps printable characters and whitespace. Input is NFKC-normalized first so
/// ligature glyphs survive as plain letters.
pub fn strip_control_chars(text: &str) -> String {
    text.nfkc()
        .filter(|ch| ch.is_whitespace() || !ch.is_control())
        .collect()
}
