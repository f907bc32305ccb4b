use frontdesk_roi::io::output::{JsonWriter, MarkdownWriter, ReportWriter, TerminalWriter};
use frontdesk_roi::{compute, generate_insights, RoiInputs, RoiReport};
use pretty_assertions::assert_eq;

fn sample_report() -> RoiReport {
    let mut inputs = RoiInputs::default();
    assert!(inputs.apply_preset("plumbing"));
    let metrics = compute(&inputs);
    let insights = generate_insights(&metrics);
    RoiReport::new(inputs, metrics, insights)
}

#[test]
fn test_json_report_round_trips() {
    let report = sample_report();
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_report(&report).unwrap();

    let parsed: RoiReport = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(parsed.metrics, report.metrics);
    assert_eq!(parsed.inputs, report.inputs);
    assert_eq!(parsed.insights, report.insights);

    // Fractional figures like 9.600000000000001 must survive the trip
    // bit-for-bit, not just to parser precision
    assert_eq!(
        parsed.metrics.sales_missed_calls.to_bits(),
        report.metrics.sales_missed_calls.to_bits()
    );
    assert_eq!(
        parsed.metrics.roi_percent.to_bits(),
        report.metrics.roi_percent.to_bits()
    );
}

#[test]
fn test_json_report_exposes_chart_series() {
    let report = sample_report();
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_report(&report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let chart = &value["chart"];
    assert_eq!(chart["human_cost"], 2500.0);
    assert!(chart["total_ai_cost"].as_f64().unwrap() > 0.0);
    assert_eq!(
        chart["total_benefit"].as_f64().unwrap(),
        report.metrics.net_benefit
    );
}

#[test]
fn test_markdown_report_sections() {
    let report = sample_report();
    let mut buffer = Vec::new();
    MarkdownWriter::new(&mut buffer)
        .write_report(&report)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("# Frontdesk ROI Estimate"));
    assert!(text.contains("## Call Volume"));
    assert!(text.contains("## Monthly Costs"));
    assert!(text.contains("## Returns"));
    assert!(text.contains("## Key Insights"));
    assert!(text.contains("| Missed calls | 96 |"));
    assert!(text.contains("| Service total | $955.00 |"));
}

#[test]
fn test_terminal_report_contains_chart_and_figures() {
    let report = sample_report();
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_report(&report)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("Frontdesk ROI Estimate"));
    assert!(text.contains("MONTHLY COST COMPARISON"));
    assert!(text.contains("Human cost"));
    assert!(text.contains("$2500.00"));
    assert!(text.contains("Key insights:"));
}

#[test]
fn test_markdown_skips_insights_when_empty() {
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
    let report = RoiReport::new(inputs, metrics, Vec::new());

    let mut buffer = Vec::new();
    MarkdownWriter::new(&mut buffer)
        .write_report(&report)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(!text.contains("## Key Insights"));
}
