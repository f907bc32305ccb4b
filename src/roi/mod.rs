//! The calculation engine: a pure mapping from an input snapshot to the
//! derived monthly and yearly figures.
//!
//! Recomputation is the caller's responsibility: after mutating any input,
//! call [`compute`] again with the complete snapshot. There is no watched
//! state and no memoization; two calls with identical inputs produce
//! bit-identical outputs.

pub mod insights;
pub mod presets;


use crate::core::{RoiInputs, RoiMetrics};

/// Months over which the one-time setup fee is amortized
const SETUP_FEE_AMORTIZATION_MONTHS: f64 = 12.0;

/// After-hours calls accrue every day of the month regardless of schedule
const AFTER_HOUR_DAYS_PER_MONTH: f64 = 30.0;

/// Derive all monthly and yearly figures from the current input snapshot.
///
/// No side effects, no I/O. Denominators are guarded: a non-positive
/// total cost yields an ROI of 0, and a non-positive annual benefit yields
/// a payback period of 0, never NaN or infinity.
pub fn compute(inputs: &RoiInputs) -> RoiMetrics {
    let days_per_month = inputs.days_open.days_per_month();

    let total_monthly_calls = inputs.business_hour_calls * days_per_month
        + inputs.after_hour_calls * AFTER_HOUR_DAYS_PER_MONTH;
    let missed_biz_monthly = inputs.missed_business_hour_calls * days_per_month;
    let after_hour_monthly = inputs.after_hour_calls * AFTER_HOUR_DAYS_PER_MONTH;
    let total_missed_calls = missed_biz_monthly + after_hour_monthly;
    let total_minutes = total_monthly_calls * inputs.avg_call_duration;

    let sales_missed_calls = total_missed_calls * (inputs.sales_call_percentage / 100.0);
    let value_per_call = inputs.avg_lead_value * (inputs.conversion_rate / 100.0);
    let potential_revenue = sales_missed_calls * value_per_call;

    let ai_base_cost = inputs.ai_subscription_cost;
    let ai_usage_cost = total_minutes * inputs.ai_per_minute_cost;
    let ai_total_monthly_cost = ai_base_cost + ai_usage_cost;

    let ai_setup_fee_monthly = inputs.ai_setup_fee / SETUP_FEE_AMORTIZATION_MONTHS;
    let ai_total_cost_with_setup = ai_total_monthly_cost + ai_setup_fee_monthly;

    let cost_savings = inputs.total_human_cost - ai_total_monthly_cost;
    let net_benefit = cost_savings + potential_revenue;

    let roi_percent = if ai_total_cost_with_setup > 0.0 {
        (net_benefit / ai_total_cost_with_setup) * 100.0
    } else {
        0.0
    };

    let first_year_investment = ai_total_monthly_cost * 12.0 + inputs.ai_setup_fee;
    let annual_benefit = net_benefit * 12.0;
    let payback_period_months = if annual_benefit > 0.0 {
        (first_year_investment / annual_benefit) * 12.0
    } else {
        0.0
    };

    RoiMetrics {
        total_monthly_calls,
        total_missed_calls,
        sales_missed_calls,
        total_minutes,
        ai_base_cost,
        ai_usage_cost,
        ai_total_monthly_cost,
        ai_setup_fee_monthly,
        ai_total_cost_with_setup,
        human_cost: inputs.total_human_cost,
        cost_savings,
        potential_revenue,
        net_benefit,
        roi_percent,
        payback_period_months,
        yearly_cost_savings: cost_savings * 12.0,
        yearly_potential_revenue: potential_revenue * 12.0,
        yearly_net_benefit: net_benefit * 12.0,
    }
}
