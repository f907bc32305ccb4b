//! Narrative insights derived from a computed estimate, answering the
//! question on the original worksheet: how much better off is the business
//! each month with an automated answering service?

use crate::core::{ChartSeries, RoiMetrics};

/// Build the insight bullets for one estimate.
///
/// Each bullet is conditional on the figures that justify it; an estimate
/// with no missed calls and no savings produces an empty list.
pub fn generate_insights(metrics: &RoiMetrics) -> Vec<String> {
    let mut insights = Vec::new();

    if metrics.total_missed_calls > 0.0 {
        insights.push(format!(
            "Your business is missing approximately {:.0} calls per month \
             that an automated answering service could capture.",
            metrics.total_missed_calls
        ));
    }

    if metrics.cost_savings > 0.0 {
        let monthly_net_return = metrics.net_benefit - metrics.ai_setup_fee_monthly;
        insights.push(format!(
            "Monthly net return: ${monthly_net_return:.2}. This comes from \
             ${:.2} in cost savings (human cost ${:.2} - service cost ${:.2}), \
             ${:.2} in added revenue from captured calls, minus ${:.2} of \
             amortized setup fee. The annual net return totals ${:.2}.",
            metrics.cost_savings,
            metrics.human_cost,
            metrics.ai_total_monthly_cost,
            metrics.potential_revenue,
            metrics.ai_setup_fee_monthly,
            monthly_net_return * 12.0
        ));
    }

    if metrics.net_benefit > 0.0 {
        let beyond_cost_difference =
            metrics.net_benefit - (metrics.human_cost - metrics.ai_total_cost_with_setup);
        insights.push(format!(
            "The total monthly benefit of ${:.2} includes both cost savings \
             (${:.2}) and new revenue from captured calls (${:.2}), which is \
             ${beyond_cost_difference:.2} more than the plain cost difference \
             between a human and the service.",
            metrics.net_benefit, metrics.cost_savings, metrics.potential_revenue
        ));
    }

    if metrics.payback_period_months > 0.0 {
        insights.push(format!(
            "The investment pays for itself in {:.1} months, after which the \
             service is pure gain over the current setup.",
            metrics.payback_period_months
        ));
    }

    if metrics.roi_percent > 0.0 {
        insights.push(format!(
            "A direct ROI of {:.0}% means every dollar invested returns ${:.2}.",
            metrics.roi_percent,
            metrics.roi_percent / 100.0 + 1.0
        ));
    }

    insights
}

const CHART_BAR_WIDTH: usize = 40;

/// Render the monthly cost comparison as a terminal bar chart.
pub fn format_cost_chart(chart: &ChartSeries) -> String {
    let mut output = String::new();

    output.push_str("MONTHLY COST COMPARISON\n");
    output.push_str("-----------------------\n");

    let rows = [
        ("Human cost", chart.human_cost),
        ("Total AI cost", chart.total_ai_cost),
        ("Total benefit", chart.total_benefit),
    ];

    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    for (label, value) in rows {
        let width = if max > 0.0 && value > 0.0 {
            ((value / max) * CHART_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{label:<14} {:<width$} ${value:.2}\n",
            "#".repeat(width),
            width = CHART_BAR_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoiInputs;
    use crate::roi::compute;

    #[test]
    fn test_insights_for_default_inputs() {
        let metrics = compute(&RoiInputs::default());
        let insights = generate_insights(&metrics);

        // Defaults miss calls, save money, and pay back; all bullets fire
        assert_eq!(insights.len(), 5);
        assert!(insights[0].contains("missing approximately 96 calls"));
    }

    #[test]
    fn test_no_insights_when_nothing_to_say() {
        let inputs = RoiInputs {
            business_hour_calls: 0.0,
            after_hour_calls: 0.0,
            missed_business_hour_calls: 0.0,
            total_human_cost: 0.0,
            ai_setup_fee: 0.0,
            ai_subscription_cost: 0.0,
            ..RoiInputs::default()
        };
        let metrics = compute(&inputs);

        assert!(generate_insights(&metrics).is_empty());
    }

    #[test]
    fn test_negative_savings_skips_return_bullet() {
        let inputs = RoiInputs {
            total_human_cost: 100.0,
            ..RoiInputs::default()
        };
        let metrics = compute(&inputs);
        assert!(metrics.cost_savings < 0.0);

        let insights = generate_insights(&metrics);
        assert!(!insights.iter().any(|i| i.contains("Monthly net return")));
    }

    #[test]
    fn test_chart_scales_to_largest_bar() {
        let chart = ChartSeries {
            human_cost: 2000.0,
            total_ai_cost: 1000.0,
            total_benefit: 500.0,
        };
        let rendered = format_cost_chart(&chart);

        assert!(rendered.contains(&"#".repeat(40)));
        assert!(rendered.contains("$2000.00"));
        assert!(rendered.contains("$500.00"));
    }

    #[test]
    fn test_chart_with_negative_benefit_renders_no_bar() {
        let chart = ChartSeries {
            human_cost: 100.0,
            total_ai_cost: 900.0,
            total_benefit: -800.0,
        };
        let rendered = format_cost_chart(&chart);

        // The negative figure is printed, but without a bar
        assert!(rendered.contains("$-800.00"));
    }
}
