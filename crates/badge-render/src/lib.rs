//! Badge rasterization.
//!
//! Renders a QR code inside a colored frame with a caption plate
//! underneath, and encodes the result as PNG. QR symbol encoding is done by
//! the `qrcode` crate; pixels are drawn with `image`/`imageproc` and text is
//! laid out with `ab_glyph`.

pub mod badge;
pub mod compose;
pub mod png;
pub mod qr;
pub mod text;

pub use badge::{Badge, render_badge};
pub use png::{encode_png, to_data_uri};
pub use qr::{QrMatrix, QrOptions};
pub use qrcode::EcLevel;

/// Errors raised while rendering or encoding a badge.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encode error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid render scale {0} (must be finite and > 0)")]
    InvalidScale(f32),
}

/// Scale a base pixel length, never going below one pixel.
pub(crate) fn scaled(base: u32, scale: f32) -> u32 {
    ((base as f32) * scale).round().max(1.0) as u32
}

pub(crate) fn check_scale(scale: f32) -> Result<(), RenderError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(RenderError::InvalidScale(scale))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ab_glyph::FontVec;

    /// Load any installed system font, or `None` when the machine has none.
    pub fn system_font() -> Option<FontVec> {
        const CANDIDATES: &[&str] = &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        CANDIDATES
            .iter()
            .filter_map(|p| std::fs::read(p).ok())
            .find_map(|data| FontVec::try_from_vec(data).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_rounds_and_clamps() {
        assert_eq!(scaled(10, 3.0), 30);
        assert_eq!(scaled(10, 1.25), 13);
        assert_eq!(scaled(1, 0.1), 1);
    }

    #[test]
    fn check_scale_rejects_nonsense() {
        assert!(check_scale(1.0).is_ok());
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(-2.0).is_err());
        assert!(check_scale(f32::NAN).is_err());
        assert!(check_scale(f32::INFINITY).is_err());
    }
}
