//! CLI subcommands.

mod check;
mod export;
mod preview;
mod settings;

pub use check::show_check;
pub use export::{ExportTarget, run_export};
pub use preview::show_preview;
pub use settings::show_settings;
