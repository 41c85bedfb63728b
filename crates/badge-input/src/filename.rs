//! File name derivation for exported badges.

/// Stem used when a caption has no usable characters.
pub const FALLBACK_STEM: &str = "qr-code";

/// Extension of exported badges.
pub const FILE_SUFFIX: &str = ".png";

/// Derive a lowercase `[a-z0-9-]` file name ending in `.png` from a caption.
///
/// - Lowercases the caption
/// - Collapses every run of characters outside `[a-z0-9]` into one `-`
/// - Drops a leading and a trailing `-`
/// - Falls back to `qr-code` when nothing is left
pub fn derive_file_name(caption: &str) -> String {
    let lowered = caption.to_lowercase();

    let mut stem = String::with_capacity(lowered.len());
    let mut in_run = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            stem.push(c);
            in_run = false;
        } else if !in_run {
            stem.push('-');
            in_run = true;
        }
    }

    let stem = stem.strip_prefix('-').unwrap_or(&stem);
    let stem = stem.strip_suffix('-').unwrap_or(stem);
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    format!("{stem}{FILE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn canonical() -> Regex {
        Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*\.png$").unwrap()
    }

    #[test]
    fn plain_caption() {
        assert_eq!(derive_file_name("Wildniscamp"), "wildniscamp.png");
    }

    #[test]
    fn punctuation_and_accents_collapse() {
        let name = derive_file_name("  My Café!! 2024  ");
        assert_eq!(name, "my-caf-2024.png");
        assert!(canonical().is_match(&name));
    }

    #[test]
    fn only_punctuation_falls_back() {
        assert_eq!(derive_file_name("!!!"), "qr-code.png");
        assert_eq!(derive_file_name(""), "qr-code.png");
        assert_eq!(derive_file_name("   "), "qr-code.png");
        assert_eq!(derive_file_name("日本語"), "qr-code.png");
    }

    #[test]
    fn single_character_separators() {
        assert_eq!(derive_file_name("-a-"), "a.png");
        assert_eq!(derive_file_name("a_b.c"), "a-b-c.png");
    }

    #[test]
    fn idempotent_on_own_stem() {
        for caption in ["Wildniscamp", "  My Café!! 2024  ", "!!!", "A--B__C", "x"] {
            let once = derive_file_name(caption);
            let stem = once.strip_suffix(FILE_SUFFIX).unwrap();
            assert_eq!(derive_file_name(stem), once);
        }
    }

    #[test]
    fn always_canonical() {
        let inputs = [
            "Hello World",
            "ÄÖÜ straße",
            "\u{1F600} party \u{1F600}",
            "tab\tand\nnewline",
            "UPPER lower 123",
            "a",
        ];
        for caption in inputs {
            let name = derive_file_name(caption);
            assert!(canonical().is_match(&name), "{caption:?} -> {name}");
        }
    }
}
