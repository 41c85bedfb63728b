//! Settings command - effective configuration.

use qr_badge_lib::SettingsManager;

pub fn show_settings(json: bool) -> anyhow::Result<()> {
    let settings = SettingsManager::from_env().get_all_settings();

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    for s in &settings {
        let value = if s.value.is_empty() { "(empty)" } else { &s.value };
        println!("{:<28} {:<26} [{:?}]", s.key, value, s.source);
        println!("    {}", s.description);
    }
    Ok(())
}
