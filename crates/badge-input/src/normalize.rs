//! Derivation of the effective payload and caption from raw form text.

use serde::Serialize;

use crate::validate::is_valid_url;
use crate::{DEFAULT_LABEL, DEFAULT_URL};

/// Shown under the URL field when it is empty or valid.
pub const HELPER_TEXT: &str = "Use a full URL including https://";

/// Shown under the URL field when it holds something that is not an http(s) URL.
pub const ERROR_TEXT: &str = "Please enter a valid http(s) URL.";

/// Fallback values substituted for empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub url: String,
    pub label: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            label: DEFAULT_LABEL.into(),
        }
    }
}

/// State of the URL field as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStatus {
    /// Nothing typed (after trimming). Neutral, not an error.
    Empty,
    Valid,
    Invalid,
}

impl UrlStatus {
    pub fn is_error(self) -> bool {
        self == UrlStatus::Invalid
    }

    /// Text displayed under the URL field for this status.
    pub fn helper_text(self) -> &'static str {
        match self {
            UrlStatus::Empty | UrlStatus::Valid => HELPER_TEXT,
            UrlStatus::Invalid => ERROR_TEXT,
        }
    }
}

/// Values actually used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInput {
    /// Literal string encoded into the QR code.
    pub payload: String,
    /// Text rendered beneath the QR code.
    pub caption: String,
    /// Whether the trimmed raw URL is an http(s) URL.
    pub is_valid: bool,
    pub status: UrlStatus,
}

/// Trim whitespace the way a browser's `String.prototype.trim` does.
///
/// Differs from [`str::trim`] in two code points: U+FEFF (byte order mark)
/// is stripped, U+0085 (next line) is kept.
pub fn js_trim(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Trim and default raw URL and caption text.
///
/// Validity is judged on the trimmed raw URL, never on the defaulted
/// payload. An invalid but non-empty URL is still used as the payload.
pub fn normalize(raw_url: &str, raw_caption: &str, defaults: &Defaults) -> NormalizedInput {
    let trimmed_url = js_trim(raw_url);
    let is_valid = is_valid_url(trimmed_url);

    let status = if trimmed_url.is_empty() {
        UrlStatus::Empty
    } else if is_valid {
        UrlStatus::Valid
    } else {
        UrlStatus::Invalid
    };

    let payload = if trimmed_url.is_empty() {
        defaults.url.clone()
    } else {
        trimmed_url.to_string()
    };

    let trimmed_caption = js_trim(raw_caption);
    let caption = if trimmed_caption.is_empty() {
        defaults.label.clone()
    } else {
        trimmed_caption.to_string()
    };

    NormalizedInput {
        payload,
        caption,
        is_valid,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_url_falls_back_to_default_and_stays_neutral() {
        let n = normalize("   ", "Camp", &Defaults::default());
        assert_eq!(n.payload, DEFAULT_URL);
        assert!(!n.is_valid);
        assert_eq!(n.status, UrlStatus::Empty);
        assert!(!n.status.is_error());
        assert_eq!(n.status.helper_text(), HELPER_TEXT);
    }

    #[test]
    fn empty_caption_falls_back_to_default_label() {
        let n = normalize("https://example.com", "", &Defaults::default());
        assert_eq!(n.caption, DEFAULT_LABEL);

        let n = normalize("https://example.com", " \t\n", &Defaults::default());
        assert_eq!(n.caption, DEFAULT_LABEL);
    }

    #[test]
    fn values_are_trimmed() {
        let n = normalize("  https://example.com/a  ", "  My Camp ", &Defaults::default());
        assert_eq!(n.payload, "https://example.com/a");
        assert_eq!(n.caption, "My Camp");
        assert!(n.is_valid);
        assert_eq!(n.status, UrlStatus::Valid);
        assert_eq!(n.status.helper_text(), HELPER_TEXT);
    }

    #[test]
    fn js_trim_strips_bom_but_keeps_next_line() {
        assert_eq!(js_trim("\u{FEFF} a \u{3000}"), "a");
        assert_eq!(js_trim("\u{2028}a\u{A0}"), "a");
        assert_eq!(js_trim("\u{85}a\u{85}"), "\u{85}a\u{85}");
        assert_eq!(js_trim(" \t\n"), "");
    }

    #[test]
    fn bom_prefixed_url_is_valid() {
        let n = normalize("\u{FEFF}https://example.com", "", &Defaults::default());
        assert_eq!(n.payload, "https://example.com");
        assert!(n.is_valid);
        assert_eq!(n.status, UrlStatus::Valid);
    }

    #[test]
    fn next_line_only_url_is_invalid_not_empty() {
        let n = normalize("\u{85}", "", &Defaults::default());
        assert_eq!(n.payload, "\u{85}");
        assert!(!n.is_valid);
        assert_eq!(n.status, UrlStatus::Invalid);
        assert_eq!(n.status.helper_text(), ERROR_TEXT);
    }

    #[test]
    fn caption_trimming_matches_url_trimming() {
        let n = normalize("", "\u{FEFF}", &Defaults::default());
        assert_eq!(n.caption, DEFAULT_LABEL);

        let n = normalize("", "\u{85}", &Defaults::default());
        assert_eq!(n.caption, "\u{85}");
    }

    #[test]
    fn invalid_url_is_still_the_payload() {
        let n = normalize("javascript:alert(1)", "", &Defaults::default());
        assert_eq!(n.payload, "javascript:alert(1)");
        assert!(!n.is_valid);
        assert_eq!(n.status, UrlStatus::Invalid);
        assert_eq!(n.status.helper_text(), ERROR_TEXT);
    }

    #[test]
    fn custom_defaults_are_used() {
        let defaults = Defaults {
            url: "https://example.org".into(),
            label: "Example".into(),
        };
        let n = normalize("", "", &defaults);
        assert_eq!(n.payload, "https://example.org");
        assert_eq!(n.caption, "Example");
    }
}
