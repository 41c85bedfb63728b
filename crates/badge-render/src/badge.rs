//! Badge composition: framed QR code, connector and caption plate.
//!
//! Layout (top to bottom):
//! ```text
//! ┌──────────────┐  frame (border color)
//! │ ┌──────────┐ │
//! │ │  QR on   │ │  paper (white)
//! │ │  paper   │ │
//! │ └──────────┘ │
//! └──────┬┬──────┘
//!        ││         connector (border color)
//! ┌──────┴┴──────┐
//! │   caption    │  caption plate (border color, white text)
//! └──────────────┘
//! ```
//! Everything outside these shapes stays transparent.

use ab_glyph::{Font, PxScale};
use badge_input::HexColor;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::compose::{fill_rect, overlay};
use crate::qr::{QrOptions, render_qr};
use crate::text::{self, CAPTION_FONT_SIZE};
use crate::{RenderError, check_scale, scaled};

/// Frame thickness around the paper.
pub const FRAME_WIDTH: u32 = 18;
/// White padding between the frame and the QR code.
pub const PAPER_PADDING: u32 = 16;
pub const CONNECTOR_WIDTH: u32 = 36;
pub const CONNECTOR_HEIGHT: u32 = 20;
pub const PLATE_PADDING_X: u32 = 24;
pub const PLATE_PADDING_Y: u32 = 16;

const PAPER_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// What a badge shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Literal string encoded into the QR code.
    pub payload: String,
    /// Text on the caption plate.
    pub caption: String,
    pub border: HexColor,
}

/// Render a badge at the given scale factor.
///
/// All lengths are multiplied by `scale`, so the output grows linearly
/// with it (up to per-module rounding of the QR code).
pub fn render_badge<F: Font>(
    badge: &Badge,
    font: &F,
    qr: &QrOptions,
    scale: f32,
) -> Result<RgbaImage, RenderError> {
    check_scale(scale)?;
    let border = Rgba(badge.border.to_rgba());

    let qr_img = render_qr(&badge.payload, qr, scale)?;
    let frame = scaled(FRAME_WIDTH, scale);
    let pad = scaled(PAPER_PADDING, scale);
    let paper_side = qr_img.width() + pad * 2;
    let outer = paper_side + frame * 2;

    let connector_w = scaled(CONNECTOR_WIDTH, scale);
    let connector_h = scaled(CONNECTOR_HEIGHT, scale);

    let font_scale = PxScale::from(CAPTION_FONT_SIZE * scale);
    let plate_pad_x = scaled(PLATE_PADDING_X, scale);
    let plate_pad_y = scaled(PLATE_PADDING_Y, scale);
    let text_width = outer.saturating_sub(plate_pad_x * 2).max(1);
    let lines = text::wrap_text(font, font_scale, &badge.caption, text_width);
    let lh = text::line_height(font, font_scale);
    let plate_h = lh * lines.len() as u32 + plate_pad_y * 2;

    let height = outer + connector_h + plate_h;
    debug!(
        width = outer,
        height,
        lines = lines.len(),
        scale,
        "Composing badge"
    );

    let mut img = RgbaImage::new(outer, height);

    fill_rect(&mut img, 0, 0, outer, outer, border);
    fill_rect(&mut img, frame, frame, paper_side, paper_side, PAPER_COLOR);
    overlay(&mut img, &qr_img, frame + pad, frame + pad);

    fill_rect(
        &mut img,
        (outer - connector_w.min(outer)) / 2,
        outer,
        connector_w.min(outer),
        connector_h,
        border,
    );

    let plate_top = outer + connector_h;
    fill_rect(&mut img, 0, plate_top, outer, plate_h, border);

    let mut y = (plate_top + plate_pad_y) as i32;
    for line in &lines {
        text::draw_centered_text(
            &mut img,
            font,
            font_scale,
            plate_pad_x,
            text_width,
            y,
            line,
            CAPTION_COLOR,
        );
        y += lh as i32;
    }

    Ok(img)
}
