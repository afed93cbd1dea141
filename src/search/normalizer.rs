/// Release-metadata keywords that end the meaningful part of a title.
const QUALITY_KEYWORDS: [&str; 4] = ["webrip", "x264", "aac", "yts"];

/// Reduces a raw query title to lowercase ASCII letters and digits.
///
/// Everything from the first quality marker (`720p`, `1080p`, `webrip`, `x264`, `aac`, `yts`,
/// case-insensitive) onwards is dropped, then every non-alphanumeric character is removed.
/// The marker cut is repeated on the cleaned text, since removing punctuation can join a
/// marker together (`web-rip`), which keeps the function idempotent.
pub fn normalize(raw: &str) -> String {
    let cleaned: String = strip_quality_tags(raw)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    strip_quality_tags(&cleaned).trim().to_string()
}

/// Truncates `text` at the first quality marker, if any.
pub fn strip_quality_tags(text: &str) -> &str {
    match find_quality_marker(text) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Byte offset of the earliest quality marker in `text`.
///
/// Markers are pure ASCII, so a match always starts on a char boundary.
fn find_quality_marker(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| is_resolution_tag(&bytes[i..]) || is_quality_keyword(&bytes[i..]))
}

// Three or four digits followed by `p`.
fn is_resolution_tag(bytes: &[u8]) -> bool {
    let digits = bytes
        .iter()
        .take(4)
        .take_while(|b| b.is_ascii_digit())
        .count();

    (3..=digits).any(|n| matches!(bytes.get(n), Some(b'p' | b'P')))
}

fn is_quality_keyword(bytes: &[u8]) -> bool {
    QUALITY_KEYWORDS.iter().any(|keyword| {
        bytes.len() >= keyword.len() && bytes[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
    })
}
