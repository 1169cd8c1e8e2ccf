//! Absolute URL resolution for uploaded media and profile links.

use std::sync::LazyLock;

use regex::Regex;

static ABSOLUTE_HTTP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("absolute url regex should compile"));

/// Whether `url` already starts with `http://` or `https://` (any case).
pub fn is_absolute_http(url: &str) -> bool {
    ABSOLUTE_HTTP.is_match(url)
}

/// Resolve a stored media URL against the API origin.
///
/// Absolute HTTP(S) URLs come back unchanged. Anything else is treated as an
/// upload path starting with `/` and appended to `api_origin`. The empty
/// string is passed through so a missing url stays visibly missing.
///
/// ```
/// use folio_media::resolve;
///
/// assert_eq!(resolve("/media/x.png", "https://api.example.com"), "https://api.example.com/media/x.png");
/// assert_eq!(resolve("https://cdn.example.com/x.png", "https://api.example.com"), "https://cdn.example.com/x.png");
/// assert_eq!(resolve("", "https://api.example.com"), "");
/// ```
pub fn resolve(raw: &str, api_origin: &str) -> String {
    if raw.is_empty() || is_absolute_http(raw) {
        raw.to_string()
    } else {
        format!("{api_origin}{raw}")
    }
}

/// Normalize a social profile link typed by hand.
///
/// Surrounding whitespace is dropped and a missing scheme becomes
/// `https://`. An empty (or all-whitespace) input stays empty, which the
/// caller takes as "remove this link".
pub fn normalize_profile_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        String::new()
    } else if is_absolute_http(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
