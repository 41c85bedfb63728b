//! Export command - render the badge to PNG.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use qr_badge_lib::export::{BadgeRasterizer, DataUriSink, DirectorySink, DownloadSink};
use qr_badge_lib::{AppConfig, BadgeForm, ExportOutcome, fonts};

pub enum ExportTarget {
    Directory(PathBuf),
    DataUri,
}

pub async fn run_export(
    form: &BadgeForm,
    config: &AppConfig,
    target: ExportTarget,
    pixel_ratio: f32,
    font: Option<PathBuf>,
) -> anyhow::Result<()> {
    let font_path = font.or_else(|| config.font_path.clone());
    let font = fonts::load_font(font_path.as_deref()).context("failed to load caption font")?;
    let rasterizer = Arc::new(BadgeRasterizer::new(font, config.qr_options()));

    let sink: Box<dyn DownloadSink> = match target {
        ExportTarget::Directory(dir) => Box::new(DirectorySink::new(dir)),
        ExportTarget::DataUri => Box::new(DataUriSink::new(std::io::stdout())),
    };

    let outcome = form
        .export(rasterizer, sink.as_ref(), pixel_ratio)
        .await
        .inspect_err(|e| tracing::error!("Export failed: {e}"))?;

    match outcome {
        ExportOutcome::Exported {
            file_name,
            bytes,
            location: Some(path),
        } => {
            tracing::info!(file_name = %file_name, bytes, "Export complete");
            eprintln!("Saved {}", path.display());
        }
        ExportOutcome::Exported { file_name, bytes, .. } => {
            tracing::info!(file_name = %file_name, bytes, "Export complete");
        }
        ExportOutcome::Skipped => tracing::warn!("Export already in progress"),
    }

    Ok(())
}
