//! Terminal preview of the badge.

use std::fmt::Write;

use badge_render::{QrMatrix, QrOptions, RenderError};

use crate::form::BadgeForm;

/// Draw a QR matrix with Unicode half blocks, two module rows per line.
///
/// ▀ = top dark, ▄ = bottom dark, █ = both dark, space = both light.
pub fn render_terminal(matrix: &QrMatrix) -> String {
    let width = matrix.width();
    let mut out = String::new();

    for y in (0..width).step_by(2) {
        for x in 0..width {
            let top = matrix.is_dark(x, y);
            let bottom = matrix.is_dark(x, y + 1);
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }

    out
}

/// QR code of the effective payload followed by the caption and the
/// URL helper text.
pub fn preview(form: &BadgeForm, qr: &QrOptions) -> Result<String, RenderError> {
    let view = form.view();
    let matrix = QrMatrix::encode(&view.payload, qr.ec_level, qr.margin.max(1))?;

    let mut out = render_terminal(&matrix);
    let pad = matrix.width().saturating_sub(view.caption.chars().count()) / 2;
    let _ = writeln!(out, "{}{}", " ".repeat(pad), view.caption);
    let _ = writeln!(out);
    let marker = if view.show_error { "!" } else { "i" };
    let _ = writeln!(out, "[{marker}] {}", view.helper_text);
    let _ = writeln!(out, "    border {}  ->  {}", view.border_color, view.file_name);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge_render::EcLevel;

    #[test]
    fn terminal_rows_are_halved() {
        let matrix = QrMatrix::encode("https://example.com", EcLevel::M, 1).unwrap();
        let text = render_terminal(&matrix);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), matrix.width().div_ceil(2));
        assert!(lines.iter().all(|l| l.chars().count() == matrix.width()));
        // Quiet zone row above the finder pattern: top light, bottom dark.
        assert_eq!(lines[0].chars().nth(1), Some('▄'));
    }

    #[test]
    fn preview_includes_caption_and_helper() {
        let mut form = BadgeForm::default();
        form.set_caption("Summer Camp");
        let text = preview(&form, &QrOptions::default()).unwrap();
        assert!(text.contains("Summer Camp"));
        assert!(text.contains("[i] Use a full URL including https://"));
        assert!(text.contains("summer-camp.png"));
    }

    #[test]
    fn preview_flags_invalid_url() {
        let mut form = BadgeForm::default();
        form.set_url("not a url");
        let text = preview(&form, &QrOptions::default()).unwrap();
        assert!(text.contains("[!] Please enter a valid http(s) URL."));
    }
}
