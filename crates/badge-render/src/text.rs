//! Caption text measurement, wrapping and drawing.

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Caption font size in pixels at scale 1.
pub const CAPTION_FONT_SIZE: f32 = 44.0;

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height<F: Font>(font: &F, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Draw `text` horizontally centered inside `[left, left + width)`.
pub fn draw_centered_text<F: Font>(
    img: &mut RgbaImage,
    font: &F,
    scale: PxScale,
    left: u32,
    width: u32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let text_width = measure_text_width(font, scale, text) as i32;
    let x = left as i32 + ((width as i32) - text_width).max(0) / 2;
    draw_text_mut(img, color, x, y, scale, font, text);
}

/// Wrap text to fit within `max_width` pixels.
///
/// Words wider than the limit are broken between characters. Always
/// returns at least one line.
pub fn wrap_text<F: Font>(font: &F, scale: PxScale, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width: u32 = 0;

    for word in text.split_inclusive(char::is_whitespace) {
        let word_width = measure_text_width(font, scale, word.trim_end());

        if current_width + word_width > max_width && !current_line.is_empty() {
            lines.push(current_line.trim_end().to_string());
            current_line.clear();
            current_width = 0;
        }

        if word_width > max_width && current_line.is_empty() {
            for ch in word.chars() {
                let ch_w = measure_text_width(font, scale, ch.encode_utf8(&mut [0; 4]));
                if current_width + ch_w > max_width && !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                current_line.push(ch);
                current_width += ch_w;
            }
            continue;
        }

        current_line.push_str(word);
        current_width += measure_text_width(font, scale, word);
    }

    let last = current_line.trim_end();
    if !last.is_empty() || lines.is_empty() {
        lines.push(last.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::system_font;

    #[test]
    fn wider_text_measures_wider() {
        let Some(font) = system_font() else { return };
        let scale = PxScale::from(CAPTION_FONT_SIZE);
        assert_eq!(measure_text_width(&font, scale, ""), 0);
        assert!(
            measure_text_width(&font, scale, "Wildniscamp")
                > measure_text_width(&font, scale, "Wild")
        );
        assert!(line_height(&font, scale) > 0);
    }

    #[test]
    fn short_caption_stays_on_one_line() {
        let Some(font) = system_font() else { return };
        let scale = PxScale::from(CAPTION_FONT_SIZE);
        let lines = wrap_text(&font, scale, "Wildniscamp", 10_000);
        assert_eq!(lines, vec!["Wildniscamp".to_string()]);
    }

    #[test]
    fn long_caption_wraps_within_width() {
        let Some(font) = system_font() else { return };
        let scale = PxScale::from(CAPTION_FONT_SIZE);
        let max = 300;
        let lines = wrap_text(&font, scale, "Wildniscamp summer festival at the lake", max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure_text_width(&font, scale, line) <= max, "{line:?} too wide");
        }
    }

    #[test]
    fn unbreakable_word_is_split() {
        let Some(font) = system_font() else { return };
        let scale = PxScale::from(CAPTION_FONT_SIZE);
        let lines = wrap_text(&font, scale, &"W".repeat(40), 200);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "W".repeat(40));
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        let Some(font) = system_font() else { return };
        let lines = wrap_text(&font, PxScale::from(20.0), "", 100);
        assert_eq!(lines, vec![String::new()]);
    }
}
