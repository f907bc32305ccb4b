use crate::config::{apply, FrontdeskConfig};
use crate::core::{DaysOpen, RoiInputs, RoiReport};
use crate::io::output::{create_writer, OutputFormat};
use crate::roi;
use crate::roi::insights::generate_insights;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything the estimate command needs, assembled from CLI flags.
///
/// Input precedence, lowest to highest: built-in defaults, config file,
/// industry preset from `--industry`, explicit flags.
#[derive(Debug, Default)]
pub struct EstimateConfig {
    pub config: Option<PathBuf>,
    pub industry: Option<String>,
    pub days_open: Option<DaysOpen>,
    pub business_hour_calls: Option<f64>,
    pub after_hour_calls: Option<f64>,
    pub missed_business_hour_calls: Option<f64>,
    pub avg_call_duration: Option<f64>,
    pub sales_call_percentage: Option<f64>,
    pub avg_lead_value: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub total_human_cost: Option<f64>,
    pub ai_setup_fee: Option<f64>,
    pub ai_subscription_cost: Option<f64>,
    pub ai_per_minute_cost: Option<f64>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run_estimate(config: EstimateConfig) -> Result<()> {
    let file_config = load_file_config(&config)?;

    let inputs = build_inputs(&config, &file_config);
    log::debug!("computing estimate for inputs: {inputs:?}");

    let metrics = roi::compute(&inputs);
    let insights = generate_insights(&metrics);
    let report = RoiReport::new(inputs, metrics, insights);

    let format = resolve_format(&config, &file_config);
    let mut writer = create_writer(format, config.output.as_deref())?;
    writer.write_report(&report)
}

fn load_file_config(config: &EstimateConfig) -> Result<FrontdeskConfig> {
    match &config.config {
        Some(path) => FrontdeskConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => FrontdeskConfig::load_default().context("failed to load .frontdesk.toml"),
    }
}

fn build_inputs(config: &EstimateConfig, file_config: &FrontdeskConfig) -> RoiInputs {
    let mut inputs = RoiInputs::default();
    file_config.apply_to(&mut inputs);

    if let Some(tag) = &config.industry {
        if !inputs.apply_preset(tag) {
            log::warn!("unknown industry tag {tag:?}; preset not applied");
        }
    }

    apply(&mut inputs.business_hour_calls, config.business_hour_calls);
    apply(&mut inputs.after_hour_calls, config.after_hour_calls);
    apply(
        &mut inputs.missed_business_hour_calls,
        config.missed_business_hour_calls,
    );
    apply(&mut inputs.avg_call_duration, config.avg_call_duration);
    apply(&mut inputs.sales_call_percentage, config.sales_call_percentage);
    apply(&mut inputs.avg_lead_value, config.avg_lead_value);
    apply(&mut inputs.conversion_rate, config.conversion_rate);
    apply(&mut inputs.total_human_cost, config.total_human_cost);
    apply(&mut inputs.ai_setup_fee, config.ai_setup_fee);
    apply(&mut inputs.ai_subscription_cost, config.ai_subscription_cost);
    apply(&mut inputs.ai_per_minute_cost, config.ai_per_minute_cost);
    if let Some(days_open) = config.days_open {
        inputs.days_open = days_open;
    }

    inputs
}

fn resolve_format(config: &EstimateConfig, file_config: &FrontdeskConfig) -> OutputFormat {
    if let Some(format) = config.format {
        return format;
    }
    if let Some(tag) = &file_config.output.default_format {
        return match OutputFormat::parse(tag) {
            Some(format) => format,
            None => {
                log::warn!("unknown output format {tag:?} in config; using terminal");
                OutputFormat::Terminal
            }
        };
    }
    OutputFormat::Terminal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_preset_and_defaults() {
        let config = EstimateConfig {
            industry: Some("hvac".to_string()),
            conversion_rate: Some(9.0),
            total_human_cost: Some(2800.0),
            ..EstimateConfig::default()
        };

        let inputs = build_inputs(&config, &FrontdeskConfig::default());

        // Preset seeds lead value; the explicit flag wins for conversion rate
        assert_eq!(inputs.avg_lead_value, 600.0);
        assert_eq!(inputs.conversion_rate, 9.0);
        assert_eq!(inputs.total_human_cost, 2800.0);
    }

    #[test]
    fn test_unknown_industry_flag_keeps_snapshot() {
        let config = EstimateConfig {
            industry: Some("locksmith".to_string()),
            ..EstimateConfig::default()
        };

        let inputs = build_inputs(&config, &FrontdeskConfig::default());
        assert_eq!(inputs, RoiInputs::default());
    }

    #[test]
    fn test_cli_preset_overrides_config_revenue() {
        let mut file_config = FrontdeskConfig::default();
        file_config.revenue.avg_lead_value = Some(700.0);

        let config = EstimateConfig {
            industry: Some("cleaning".to_string()),
            ..EstimateConfig::default()
        };

        let inputs = build_inputs(&config, &file_config);
        assert_eq!(inputs.avg_lead_value, 250.0);
        assert_eq!(inputs.conversion_rate, 25.0);
    }

    #[test]
    fn test_format_resolution_order() {
        let mut file_config = FrontdeskConfig::default();
        file_config.output.default_format = Some("json".to_string());

        let flag = EstimateConfig {
            format: Some(OutputFormat::Markdown),
            ..EstimateConfig::default()
        };
        assert_eq!(resolve_format(&flag, &file_config), OutputFormat::Markdown);

        let no_flag = EstimateConfig::default();
        assert_eq!(resolve_format(&no_flag, &file_config), OutputFormat::Json);

        file_config.output.default_format = Some("html".to_string());
        assert_eq!(
            resolve_format(&no_flag, &file_config),
            OutputFormat::Terminal
        );
    }
}
