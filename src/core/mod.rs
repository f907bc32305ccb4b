//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Operating-day schedule for the business
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum DaysOpen {
    /// Monday-Friday (22 operating days/month)
    #[default]
    Weekdays,
    /// Monday-Saturday (26 operating days/month)
    SixDays,
    /// Every day (30 operating days/month)
    AllDays,
}

impl DaysOpen {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekdays" => Some(Self::Weekdays),
            "sixdays" => Some(Self::SixDays),
            "alldays" => Some(Self::AllDays),
            _ => None,
        }
    }

    /// Unrecognized tags fall back to the weekday schedule rather than failing
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn days_per_month(self) -> f64 {
        match self {
            Self::Weekdays => 22.0,
            Self::SixDays => 26.0,
            Self::AllDays => 30.0,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Weekdays => "weekdays",
            Self::SixDays => "sixdays",
            Self::AllDays => "alldays",
        }
    }
}

/// Complete input snapshot for one ROI estimate.
///
/// The engine never rejects values: negative or out-of-range numbers flow
/// through the arithmetic unchanged. Clamping is the input layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Calls answered during business hours, per day
    pub business_hour_calls: f64,
    /// Calls arriving outside business hours, per day
    pub after_hour_calls: f64,
    /// Business-hour calls that go unanswered, per day
    pub missed_business_hour_calls: f64,
    /// Average call length in minutes
    pub avg_call_duration: f64,
    /// Share of calls that are sales opportunities (0-100)
    pub sales_call_percentage: f64,
    pub days_open: DaysOpen,
    /// Revenue from one converted lead
    pub avg_lead_value: f64,
    /// Share of sales opportunities that convert (0-100)
    pub conversion_rate: f64,
    /// Monthly cost of a human receptionist
    pub total_human_cost: f64,
    /// One-time onboarding fee for the answering service
    pub ai_setup_fee: f64,
    /// Monthly platform fee
    pub ai_subscription_cost: f64,
    /// Variable cost per handled minute
    pub ai_per_minute_cost: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            business_hour_calls: 5.0,
            after_hour_calls: 1.0,
            missed_business_hour_calls: 3.0,
            avg_call_duration: 5.0,
            sales_call_percentage: 10.0,
            days_open: DaysOpen::Weekdays,
            avg_lead_value: 450.0,
            conversion_rate: 10.0,
            total_human_cost: 2500.0,
            ai_setup_fee: 1000.0,
            ai_subscription_cost: 500.0,
            ai_per_minute_cost: 0.65,
        }
    }
}

/// Derived monthly and yearly figures. Always recomputed from a full input
/// snapshot; no field may reflect a stale input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub total_monthly_calls: f64,
    pub total_missed_calls: f64,
    pub sales_missed_calls: f64,
    pub total_minutes: f64,
    pub ai_base_cost: f64,
    pub ai_usage_cost: f64,
    pub ai_total_monthly_cost: f64,
    pub ai_setup_fee_monthly: f64,
    pub ai_total_cost_with_setup: f64,
    /// Carried through from the inputs so a report is self-contained
    pub human_cost: f64,
    pub cost_savings: f64,
    pub potential_revenue: f64,
    pub net_benefit: f64,
    pub roi_percent: f64,
    pub payback_period_months: f64,
    pub yearly_cost_savings: f64,
    pub yearly_potential_revenue: f64,
    pub yearly_net_benefit: f64,
}

/// The three bars of the monthly cost comparison chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub human_cost: f64,
    pub total_ai_cost: f64,
    pub total_benefit: f64,
}

impl ChartSeries {
    pub fn from_metrics(metrics: &RoiMetrics) -> Self {
        Self {
            human_cost: metrics.human_cost,
            total_ai_cost: metrics.ai_total_monthly_cost + metrics.ai_setup_fee_monthly,
            total_benefit: metrics.net_benefit,
        }
    }
}

/// Everything an output writer needs to render one estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiReport {
    pub timestamp: DateTime<Utc>,
    pub inputs: RoiInputs,
    pub metrics: RoiMetrics,
    pub chart: ChartSeries,
    pub insights: Vec<String>,
}

impl RoiReport {
    pub fn new(inputs: RoiInputs, metrics: RoiMetrics, insights: Vec<String>) -> Self {
        let chart = ChartSeries::from_metrics(&metrics);
        Self {
            timestamp: Utc::now(),
            inputs,
            metrics,
            chart,
            insights,
        }
    }
}
