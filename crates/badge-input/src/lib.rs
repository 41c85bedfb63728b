//! Input handling for QR badges.
//!
//! Everything here is pure and total: URL validation, trimming and
//! defaulting of raw form text, file name derivation and border color
//! parsing. Nothing touches the network or the filesystem.

pub mod color;
pub mod filename;
pub mod normalize;
pub mod validate;

pub use color::{ColorError, HexColor};
pub use filename::derive_file_name;
pub use normalize::{Defaults, NormalizedInput, UrlStatus, js_trim, normalize};
pub use validate::is_valid_url;

/// URL used when the URL field is empty.
pub const DEFAULT_URL: &str = "https://wildniscamp.com";

/// Caption used when the caption field is empty.
pub const DEFAULT_LABEL: &str = "Wildniscamp";

/// Border color a fresh form starts with.
pub const DEFAULT_BORDER_COLOR: &str = "#8ea989";

/// Maximum caption length, counted in UTF-16 code units like an HTML
/// input's `maxLength`.
pub const CAPTION_MAX_CHARS: usize = 40;

/// Caption length in UTF-16 code units.
pub fn caption_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Truncate raw caption input to [`CAPTION_MAX_CHARS`] UTF-16 code units.
///
/// A character whose code units would straddle the limit is dropped
/// entirely; the result is always valid UTF-8.
pub fn clamp_caption(raw: &str) -> &str {
    let mut units = 0;
    for (idx, c) in raw.char_indices() {
        units += c.len_utf16();
        if units > CAPTION_MAX_CHARS {
            return &raw[..idx];
        }
    }
    raw
}
