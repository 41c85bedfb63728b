//! Badge export: rasterize, encode as PNG, hand over to a download sink.

pub mod gate;
pub mod rasterizer;
pub mod sink;

use std::path::PathBuf;

use badge_render::{Badge, RenderError, to_data_uri};
use image::RgbaImage;

pub use gate::{ExportGate, ExportGuard};
pub use rasterizer::BadgeRasterizer;
pub use sink::{DataUriSink, DirectorySink};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rasterizer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result of an export trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Another export was still running; nothing happened.
    Skipped,
    Exported {
        file_name: String,
        bytes: usize,
        location: Option<PathBuf>,
    },
}

/// An encoded badge ready to be saved.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: String,
    pub png: Vec<u8>,
}

impl Download {
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.png)
    }
}

/// Turns a badge into pixels. Runs on the blocking thread pool.
pub trait Rasterizer: Send + Sync + 'static {
    fn rasterize(&self, badge: &Badge, scale: f32) -> Result<RgbaImage, RenderError>;
}

/// Saves an encoded badge under its file name.
pub trait DownloadSink {
    /// Returns where the file ended up, if it has a filesystem location.
    fn deliver(&self, download: &Download) -> Result<Option<PathBuf>, ExportError>;
}

/// Upper bound of the export scale factor. A 520px QR at this scale is
/// already a 4160px square.
pub const MAX_EXPORT_SCALE: f32 = 8.0;

/// Scale factor for an export: the device pixel ratio, but never below
/// `min_scale` and never above [`MAX_EXPORT_SCALE`]. Unusable ratios fall
/// back to `min_scale`.
pub fn export_scale(pixel_ratio: f32, min_scale: f32) -> f32 {
    let floor = min_scale.min(MAX_EXPORT_SCALE);
    if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio.clamp(floor, MAX_EXPORT_SCALE)
    } else {
        floor
    }
}
