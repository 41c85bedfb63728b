//! Badge form state: raw inputs, derived values and the export action.
//!
//! A [`BadgeForm`] owns everything one form instance needs. Inputs change
//! only through the setters; derived values are recomputed from the raw
//! text every time they are read.

use std::sync::Arc;

use badge_input::{
    ColorError, Defaults, HexColor, NormalizedInput, UrlStatus, clamp_caption, derive_file_name,
    normalize,
};
use badge_render::{Badge, RenderError, encode_png};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::config::app_config::MIN_EXPORT_SCALE;
use crate::export::{
    Download, DownloadSink, ExportError, ExportGate, ExportOutcome, Rasterizer, export_scale,
};

const EXPORT_LABEL: &str = "Download PNG";
const EXPORTING_LABEL: &str = "Exporting...";

/// Everything a front end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub payload: String,
    pub caption: String,
    pub url_status: UrlStatus,
    pub helper_text: &'static str,
    pub show_error: bool,
    pub file_name: String,
    /// Uppercase `#RRGGBB`.
    pub border_color: String,
    pub export_label: &'static str,
    pub export_enabled: bool,
}

#[derive(Debug)]
pub struct BadgeForm {
    url_input: String,
    caption_input: String,
    border_color: HexColor,
    defaults: Defaults,
    min_export_scale: f32,
    gate: ExportGate,
}

impl BadgeForm {
    /// A fresh form showing the default URL and label.
    pub fn new(defaults: Defaults, border_color: HexColor) -> Self {
        Self {
            url_input: defaults.url.clone(),
            caption_input: clamp_caption(&defaults.label).to_string(),
            border_color,
            defaults,
            min_export_scale: MIN_EXPORT_SCALE,
            gate: ExportGate::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut form = Self::new(config.defaults(), config.border_color);
        form.min_export_scale = config.min_export_scale;
        form
    }

    pub fn set_url(&mut self, raw: &str) {
        self.url_input = raw.to_string();
    }

    /// Replace the caption text, keeping at most 40 characters.
    pub fn set_caption(&mut self, raw: &str) {
        self.caption_input = clamp_caption(raw).to_string();
    }

    /// Replace the border color. Invalid input leaves the current color.
    pub fn set_border_color(&mut self, raw: &str) -> Result<(), ColorError> {
        self.border_color = raw.parse()?;
        Ok(())
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn caption_input(&self) -> &str {
        &self.caption_input
    }

    pub fn border_color(&self) -> HexColor {
        self.border_color
    }

    pub fn normalized(&self) -> NormalizedInput {
        normalize(&self.url_input, &self.caption_input, &self.defaults)
    }

    /// File name an export would produce right now.
    pub fn file_name(&self) -> String {
        derive_file_name(&self.normalized().caption)
    }

    /// The badge as currently rendered.
    pub fn badge(&self) -> Badge {
        let n = self.normalized();
        Badge {
            payload: n.payload,
            caption: n.caption,
            border: self.border_color,
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.gate.is_exporting()
    }

    pub fn gate(&self) -> &ExportGate {
        &self.gate
    }

    pub fn view(&self) -> FormView {
        let n = self.normalized();
        let exporting = self.is_exporting();
        FormView {
            file_name: derive_file_name(&n.caption),
            payload: n.payload,
            caption: n.caption,
            url_status: n.status,
            helper_text: n.status.helper_text(),
            show_error: n.status.is_error(),
            border_color: self.border_color.label(),
            export_label: if exporting {
                EXPORTING_LABEL
            } else {
                EXPORT_LABEL
            },
            export_enabled: !exporting,
        }
    }

    /// Rasterize the current badge and hand it to `sink`.
    ///
    /// While an export of this form is running, further calls return
    /// [`ExportOutcome::Skipped`]. The exporting flag is cleared on every
    /// exit path, failures included.
    pub async fn export<R, S>(
        &self,
        rasterizer: Arc<R>,
        sink: &S,
        pixel_ratio: f32,
    ) -> Result<ExportOutcome, ExportError>
    where
        R: Rasterizer,
        S: DownloadSink + ?Sized,
    {
        let Some(_guard) = self.gate.try_begin() else {
            debug!("Export already in progress, ignoring trigger");
            return Ok(ExportOutcome::Skipped);
        };

        let badge = self.badge();
        let file_name = derive_file_name(&badge.caption);
        let scale = export_scale(pixel_ratio, self.min_export_scale);
        info!(file_name = %file_name, scale, payload = %badge.payload, "Exporting badge");

        let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, RenderError> {
            let img = rasterizer.rasterize(&badge, scale)?;
            encode_png(&img)
        })
        .await??;

        let download = Download { file_name, png };
        let location = sink.deliver(&download)?;

        Ok(ExportOutcome::Exported {
            bytes: download.png.len(),
            file_name: download.file_name,
            location,
        })
    }
}

impl Default for BadgeForm {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
