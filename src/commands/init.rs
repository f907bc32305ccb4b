use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Frontdesk ROI configuration
#
# Every value is optional. Anything missing falls back to the built-in
# defaults, and command-line flags override this file.

# Industry preset for lead value and conversion rate. One of:
# plumbing, hvac, electrician, landscaping, cleaning, roofing, painting,
# carpentry, flooring, pest_control, other
# industry = "plumbing"

[calls]
business_hour_calls = 5
after_hour_calls = 1
missed_business_hour_calls = 3
avg_call_duration = 5
sales_call_percentage = 10
# "weekdays", "sixdays", or "alldays"
days_open = "weekdays"

[revenue]
avg_lead_value = 450.0
conversion_rate = 10.0

[costs]
total_human_cost = 2500.0
ai_setup_fee = 1000.0
ai_subscription_cost = 500.0
ai_per_minute_cost = 0.65

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {DEFAULT_CONFIG_FILE} configuration file");

    Ok(())
}
