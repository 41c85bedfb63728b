//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

use badge_input::{DEFAULT_BORDER_COLOR, DEFAULT_LABEL, DEFAULT_URL};

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("QR_BADGE_DEFAULT_URL", DEFAULT_URL, "URL encoded when the URL field is empty"),
    ("QR_BADGE_DEFAULT_LABEL", DEFAULT_LABEL, "Caption shown when the caption field is empty"),
    ("QR_BADGE_BORDER_COLOR", DEFAULT_BORDER_COLOR, "Initial border color (#rrggbb)"),
    ("QR_BADGE_QR_SIZE", "520", "QR code edge length in pixels before scaling"),
    ("QR_BADGE_QR_MARGIN", "1", "Quiet zone around the QR code in modules"),
    ("QR_BADGE_EC_LEVEL", "M", "QR error correction level (L, M, Q, H)"),
    ("QR_BADGE_MIN_EXPORT_SCALE", "3", "Lower bound for the export scale factor"),
    ("QR_BADGE_OUTPUT_DIR", ".", "Directory exported PNG files are written to"),
    ("QR_BADGE_FONT_PATH", "", "TTF/OTF font for the caption (system font if empty)"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Setting keys in declaration order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
