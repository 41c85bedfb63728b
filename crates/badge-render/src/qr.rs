//! QR code rendering.

use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::{RenderError, check_scale};

/// How the QR symbol is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrOptions {
    pub ec_level: EcLevel,
    /// Target edge length in pixels at scale 1.
    pub size: u32,
    /// Quiet zone in modules on each side.
    pub margin: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            size: 520,
            margin: 1,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([0, 0, 0, 0]),
        }
    }
}

/// Parse an error correction level name (`L`, `M`, `Q`, `H`).
pub fn parse_ec_level(name: &str) -> Option<EcLevel> {
    match name.trim().to_ascii_uppercase().as_str() {
        "L" => Some(EcLevel::L),
        "M" => Some(EcLevel::M),
        "Q" => Some(EcLevel::Q),
        "H" => Some(EcLevel::H),
        _ => None,
    }
}

/// Module grid of an encoded symbol, quiet zone included.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    width: usize,
    dark: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(data: &str, ec_level: EcLevel, margin: u32) -> Result<Self, RenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), ec_level)?;
        let inner = code.width();
        let margin = margin as usize;
        let width = inner + margin * 2;

        let mut dark = vec![false; width * width];
        for (i, color) in code.to_colors().iter().enumerate() {
            if *color == qrcode::Color::Dark {
                let x = i % inner + margin;
                let y = i / inner + margin;
                dark[y * width + x] = true;
            }
        }

        Ok(Self { width, dark })
    }

    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (`x`, `y`) is dark. Out of range reads as light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

/// Render `data` as a square RGBA QR image.
///
/// Each module becomes `max(1, floor(size * scale / modules))` pixels, so the
/// edge is at most the requested size unless the symbol has more modules
/// than pixels.
pub fn render_qr(data: &str, options: &QrOptions, scale: f32) -> Result<RgbaImage, RenderError> {
    check_scale(scale)?;
    let matrix = QrMatrix::encode(data, options.ec_level, options.margin)?;
    let modules = matrix.width() as u32;

    let target = crate::scaled(options.size, scale);
    let module_px = (target / modules).max(1);
    let img_size = modules * module_px;

    debug!(modules, module_px, img_size, "Rendering QR code");

    let mut img = RgbaImage::from_pixel(img_size, img_size, options.background);
    for y in 0..modules {
        for x in 0..modules {
            if !matrix.is_dark(x as usize, y as usize) {
                continue;
            }
            for dy in 0..module_px {
                for dx in 0..module_px {
                    img.put_pixel(x * module_px + dx, y * module_px + dy, options.foreground);
                }
            }
        }
    }

    Ok(img)
}
