use anyhow::Result;
use clap::Parser;
use frontdesk_roi::cli::{Cli, Commands};
use frontdesk_roi::commands::estimate::{run_estimate, EstimateConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            config,
            industry,
            days_open,
            business_hour_calls,
            after_hour_calls,
            missed_business_hour_calls,
            avg_call_duration,
            sales_call_percentage,
            avg_lead_value,
            conversion_rate,
            total_human_cost,
            ai_setup_fee,
            ai_subscription_cost,
            ai_per_minute_cost,
            format,
            output,
        } => run_estimate(EstimateConfig {
            config,
            industry,
            days_open,
            business_hour_calls,
            after_hour_calls,
            missed_business_hour_calls,
            avg_call_duration,
            sales_call_percentage,
            avg_lead_value,
            conversion_rate,
            total_human_cost,
            ai_setup_fee,
            ai_subscription_cost,
            ai_per_minute_cost,
            format,
            output,
        }),
        Commands::Presets => frontdesk_roi::commands::presets::list_presets(),
        Commands::Init { force } => frontdesk_roi::commands::init::init_config(force),
    }
}
