use crate::roi::presets::all_presets;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

/// Print every industry preset as a table.
pub fn list_presets() -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Industry", "Avg lead value", "Conversion rate"]);

    for (tag, preset) in all_presets() {
        table.add_row(vec![
            tag.to_string(),
            format!("${:.0}", preset.avg_lead_value),
            format!("{:.0}%", preset.conversion_rate),
        ]);
    }

    println!("{table}");
    Ok(())
}
