use ab_glyph::FontVec;
use badge_render::{Badge, QrOptions, RenderError, render_badge};
use image::RgbaImage;

use super::Rasterizer;

/// Renders badges with `badge_render` using a loaded caption font.
pub struct BadgeRasterizer {
    font: FontVec,
    qr: QrOptions,
}

impl BadgeRasterizer {
    pub fn new(font: FontVec, qr: QrOptions) -> Self {
        Self { font, qr }
    }
}

impl Rasterizer for BadgeRasterizer {
    fn rasterize(&self, badge: &Badge, scale: f32) -> Result<RgbaImage, RenderError> {
        render_badge(badge, &self.font, &self.qr, scale)
    }
}
