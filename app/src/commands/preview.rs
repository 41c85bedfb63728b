//! Preview command - QR code in the terminal.

use qr_badge_lib::{AppConfig, BadgeForm, preview};

pub fn show_preview(form: &BadgeForm, config: &AppConfig) -> anyhow::Result<()> {
    let text = preview::preview(form, &config.qr_options())?;
    println!();
    print!("{text}");
    println!();
    Ok(())
}
