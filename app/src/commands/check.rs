//! Check command - validity report for the current inputs.

use qr_badge_lib::BadgeForm;

/// Print the URL status and derived values. An invalid URL is reported,
/// not treated as a failure.
pub fn show_check(form: &BadgeForm, json: bool) -> anyhow::Result<()> {
    let view = form.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!();
    println!("  URL status:  {:?}", view.url_status);
    println!("  {}", view.helper_text);
    println!();
    println!("  Payload:     {}", view.payload);
    println!("  Caption:     {}", view.caption);
    println!("  Border:      {}", view.border_color);
    println!("  File name:   {}", view.file_name);
    println!();

    Ok(())
}
