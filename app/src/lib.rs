//! QR badge creator: form state, configuration and PNG export.

pub mod bootstrap;
pub mod config;
pub mod export;
pub mod fonts;
pub mod form;
pub mod preview;

pub use config::{AppConfig, SettingsManager};
pub use export::{ExportError, ExportOutcome};
pub use form::{BadgeForm, FormView};
