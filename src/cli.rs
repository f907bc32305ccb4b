use crate::core::DaysOpen;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frontdesk-roi")]
#[command(
    about = "Estimate the ROI of automated call answering for a home-service business",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute an ROI estimate from defaults, config file, and flags
    Estimate {
        /// Config file (defaults to .frontdesk.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Industry tag; seeds lead value and conversion rate from its preset
        #[arg(long)]
        industry: Option<String>,

        /// Operating-day schedule
        #[arg(long, value_enum)]
        days_open: Option<DaysOpen>,

        /// Calls answered during business hours, per day
        #[arg(long)]
        business_hour_calls: Option<f64>,

        /// Calls arriving outside business hours, per day
        #[arg(long)]
        after_hour_calls: Option<f64>,

        /// Business-hour calls that go unanswered, per day
        #[arg(long)]
        missed_business_hour_calls: Option<f64>,

        /// Average call length in minutes
        #[arg(long)]
        avg_call_duration: Option<f64>,

        /// Share of calls that are sales opportunities (0-100)
        #[arg(long)]
        sales_call_percentage: Option<f64>,

        /// Revenue from one converted lead
        #[arg(long)]
        avg_lead_value: Option<f64>,

        /// Share of sales opportunities that convert (0-100)
        #[arg(long)]
        conversion_rate: Option<f64>,

        /// Monthly cost of a human receptionist
        #[arg(long)]
        total_human_cost: Option<f64>,

        /// One-time onboarding fee for the answering service
        #[arg(long)]
        ai_setup_fee: Option<f64>,

        /// Monthly platform fee
        #[arg(long)]
        ai_subscription_cost: Option<f64>,

        /// Variable cost per handled minute
        #[arg(long)]
        ai_per_minute_cost: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List industry presets for lead value and conversion rate
    Presets,

    /// Create a default .frontdesk.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
