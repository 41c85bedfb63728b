//! Process startup: logging, `.env` loading and config.

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, SettingsManager};

const DEFAULT_FILTER: &str = "warn,qr_badge=info,qr_badge_lib=info";

/// Install the tracing subscriber. Logs go to stderr so stdout stays
/// usable for JSON and data URI output.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Load `.env`, then build the runtime config from the environment.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let sm = SettingsManager::from_env();
    let config = AppConfig::load(&sm)?;
    tracing::debug!(?config, "Settings loaded");
    Ok(config)
}
