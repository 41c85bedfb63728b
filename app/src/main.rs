//! qr-badge CLI - QR code badges with a caption, exported as PNG.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use qr_badge_lib::BadgeForm;
use qr_badge_lib::bootstrap;

#[derive(Parser)]
#[command(name = "qr-badge")]
#[command(about = "Create QR code badges with a caption and export them as PNG", long_about = None)]
struct Cli {
    /// URL to encode (empty uses the configured default)
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Text beneath the QR code (max 40 characters)
    #[arg(short, long, global = true)]
    caption: Option<String>,

    /// Border color as #rrggbb
    #[arg(short, long, global = true)]
    border_color: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the QR code in the terminal (default)
    Preview,
    /// Report URL validity and the derived values
    Check {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the badge and save it as PNG
    Export {
        /// Output directory (defaults to QR_BADGE_OUTPUT_DIR)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Device pixel ratio; the export scale never drops below the configured minimum
        #[arg(long, default_value_t = 1.0)]
        pixel_ratio: f32,
        /// Print a data:image/png URI to stdout instead of writing a file
        #[arg(long)]
        data_uri: bool,
        /// TTF/OTF font for the caption
        #[arg(long)]
        font: Option<PathBuf>,
    },
    /// List effective settings
    Settings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_tracing();
    let config = bootstrap::init_config()?;

    let cli = Cli::parse();

    let mut form = BadgeForm::from_config(&config);
    if let Some(url) = &cli.url {
        form.set_url(url);
    }
    if let Some(caption) = &cli.caption {
        if badge_input::caption_len(caption) > badge_input::CAPTION_MAX_CHARS {
            tracing::warn!(
                "Caption longer than {} characters, truncating",
                badge_input::CAPTION_MAX_CHARS
            );
        }
        form.set_caption(caption);
    }
    if let Some(color) = &cli.border_color {
        form.set_border_color(color)?;
    }

    match cli.command.unwrap_or(Commands::Preview) {
        Commands::Preview => commands::show_preview(&form, &config)?,
        Commands::Check { json } => commands::show_check(&form, json)?,
        Commands::Export {
            out_dir,
            pixel_ratio,
            data_uri,
            font,
        } => {
            let target = if data_uri {
                commands::ExportTarget::DataUri
            } else {
                commands::ExportTarget::Directory(out_dir.unwrap_or_else(|| config.output_dir.clone()))
            };
            commands::run_export(&form, &config, target, pixel_ratio, font).await?
        }
        Commands::Settings { json } => commands::show_settings(json)?,
    }

    Ok(())
}
