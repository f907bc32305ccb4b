//! Estimates the return on investment of adopting an automated
//! call-answering service versus a human receptionist, for home-service
//! businesses.
//!
//! The heart of the crate is [`roi::compute`], a pure function from a
//! complete input snapshot to the derived monthly and yearly figures.
//! Everything around it is presentation: industry presets, narrative
//! insights, a cost-comparison chart series, and terminal / JSON /
//! Markdown report writers.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod roi;

// Re-export commonly used types
pub use crate::core::{ChartSeries, DaysOpen, RoiInputs, RoiMetrics, RoiReport};

pub use crate::config::{ConfigError, FrontdeskConfig, DEFAULT_CONFIG_FILE};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::roi::{
    compute,
    insights::{format_cost_chart, generate_insights},
    presets::{all_presets, lookup_preset, IndustryPreset},
};
