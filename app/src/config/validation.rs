//! Setting value validation.

use badge_input::{CAPTION_MAX_CHARS, HexColor, caption_len, is_valid_url, js_trim};
use badge_render::qr::parse_ec_level;

use crate::export::MAX_EXPORT_SCALE;

const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf"];

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "QR_BADGE_DEFAULT_URL" => {
            if !is_valid_url(js_trim(value)) {
                return Err("must be an absolute http(s) URL".into());
            }
        }
        "QR_BADGE_DEFAULT_LABEL" => {
            let trimmed = js_trim(value);
            if trimmed.is_empty() || caption_len(trimmed) > CAPTION_MAX_CHARS {
                return Err(format!("must be 1-{CAPTION_MAX_CHARS} characters"));
            }
        }
        "QR_BADGE_BORDER_COLOR" => {
            value.parse::<HexColor>().map_err(|e| e.to_string())?;
        }
        "QR_BADGE_QR_SIZE" => validate_int_range(value, 64, 4096)?,
        "QR_BADGE_QR_MARGIN" => validate_int_range(value, 0, 16)?,
        "QR_BADGE_EC_LEVEL" => {
            if parse_ec_level(value).is_none() {
                return Err("must be L, M, Q, or H".into());
            }
        }
        "QR_BADGE_MIN_EXPORT_SCALE" => {
            let v: f32 = value.trim().parse().map_err(|_| "must be a float")?;
            if !(1.0..=MAX_EXPORT_SCALE).contains(&v) {
                return Err(format!("must be between 1.0 and {MAX_EXPORT_SCALE:.1}"));
            }
        }
        "QR_BADGE_OUTPUT_DIR" => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        "QR_BADGE_FONT_PATH" => {
            let lower = value.trim().to_lowercase();
            if !lower.is_empty() && !FONT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                return Err("must be a .ttf or .otf file".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.trim().parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
