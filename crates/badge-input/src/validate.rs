//! Syntactic http(s) URL validation.

use url::Url;

/// Returns true if `text` parses as an absolute URL whose scheme is
/// `http` or `https`.
///
/// Parse failures (relative, empty, malformed input) and every other
/// scheme yield `false`. No network access happens here.
pub fn is_valid_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
