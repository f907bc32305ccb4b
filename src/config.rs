//! Configuration file support.
//!
//! A `.frontdesk.toml` next to the working directory can pre-fill any of
//! the estimate inputs, pick an industry, and set the default output
//! format. Every field is optional; anything absent falls back to the
//! built-in defaults. Command-line flags override the file.

use crate::core::{DaysOpen, RoiInputs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = ".frontdesk.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontdeskConfig {
    /// Industry tag whose preset seeds lead value and conversion rate
    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub calls: CallsConfig,

    #[serde(default)]
    pub revenue: RevenueConfig,

    #[serde(default)]
    pub costs: CostsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallsConfig {
    pub business_hour_calls: Option<f64>,
    pub after_hour_calls: Option<f64>,
    pub missed_business_hour_calls: Option<f64>,
    pub avg_call_duration: Option<f64>,
    pub sales_call_percentage: Option<f64>,
    /// "weekdays", "sixdays", or "alldays"; anything else means weekdays
    pub days_open: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevenueConfig {
    pub avg_lead_value: Option<f64>,
    pub conversion_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostsConfig {
    pub total_human_cost: Option<f64>,
    pub ai_setup_fee: Option<f64>,
    pub ai_subscription_cost: Option<f64>,
    pub ai_per_minute_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// "terminal", "json", or "markdown"
    pub default_format: Option<String>,
}

impl FrontdeskConfig {
    /// Load configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `.frontdesk.toml` from the working directory if present,
    /// otherwise fall back to defaults. A file that exists but does not
    /// parse is still an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overlay the configured values onto an input snapshot.
    ///
    /// Precedence at this layer: built-in defaults, then the industry
    /// preset (when the tag is known), then explicit per-field values.
    pub fn apply_to(&self, inputs: &mut RoiInputs) {
        if let Some(tag) = &self.industry {
            if !inputs.apply_preset(tag) {
                log::warn!("unknown industry tag {tag:?} in config; preset not applied");
            }
        }

        let c = &self.calls;
        apply(&mut inputs.business_hour_calls, c.business_hour_calls);
        apply(&mut inputs.after_hour_calls, c.after_hour_calls);
        apply(
            &mut inputs.missed_business_hour_calls,
            c.missed_business_hour_calls,
        );
        apply(&mut inputs.avg_call_duration, c.avg_call_duration);
        apply(&mut inputs.sales_call_percentage, c.sales_call_percentage);
        if let Some(tag) = &c.days_open {
            inputs.days_open = DaysOpen::parse_or_default(tag);
        }

        apply(&mut inputs.avg_lead_value, self.revenue.avg_lead_value);
        apply(&mut inputs.conversion_rate, self.revenue.conversion_rate);

        let costs = &self.costs;
        apply(&mut inputs.total_human_cost, costs.total_human_cost);
        apply(&mut inputs.ai_setup_fee, costs.ai_setup_fee);
        apply(&mut inputs.ai_subscription_cost, costs.ai_subscription_cost);
        apply(&mut inputs.ai_per_minute_cost, costs.ai_per_minute_cost);
    }
}

/// Overlay one optional value onto an input field. Shared by the config
/// file and CLI flag layers so precedence works the same way in both.
pub(crate) fn apply(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}
