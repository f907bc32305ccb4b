use crate::core::RoiReport;
use crate::roi::insights::format_cost_chart;
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_call_volume(report)?;
        self.write_cost_comparison(report)?;
        self.write_returns(report)?;
        self.write_insights(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Frontdesk ROI Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_call_volume(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## Call Volume")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Per Month |")?;
        writeln!(self.writer, "|--------|-----------|")?;
        writeln!(self.writer, "| Total calls | {:.0} |", m.total_monthly_calls)?;
        writeln!(self.writer, "| Missed calls | {:.0} |", m.total_missed_calls)?;
        writeln!(
            self.writer,
            "| Missed sales opportunities | {:.1} |",
            m.sales_missed_calls
        )?;
        writeln!(self.writer, "| Call minutes | {:.0} |", m.total_minutes)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_comparison(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## Monthly Costs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Item | Amount |")?;
        writeln!(self.writer, "|------|--------|")?;
        writeln!(self.writer, "| Human receptionist | ${:.2} |", m.human_cost)?;
        writeln!(self.writer, "| Service subscription | ${:.2} |", m.ai_base_cost)?;
        writeln!(self.writer, "| Service usage | ${:.2} |", m.ai_usage_cost)?;
        writeln!(
            self.writer,
            "| Service total | ${:.2} |",
            m.ai_total_monthly_cost
        )?;
        writeln!(
            self.writer,
            "| Setup fee (amortized) | ${:.2} |",
            m.ai_setup_fee_monthly
        )?;
        writeln!(
            self.writer,
            "| Service total with setup | ${:.2} |",
            m.ai_total_cost_with_setup
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_returns(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## Returns")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Monthly | Yearly |")?;
        writeln!(self.writer, "|--------|---------|--------|")?;
        writeln!(
            self.writer,
            "| Cost savings | ${:.2} | ${:.2} |",
            m.cost_savings, m.yearly_cost_savings
        )?;
        writeln!(
            self.writer,
            "| Recovered revenue | ${:.2} | ${:.2} |",
            m.potential_revenue, m.yearly_potential_revenue
        )?;
        writeln!(
            self.writer,
            "| Net benefit | ${:.2} | ${:.2} |",
            m.net_benefit, m.yearly_net_benefit
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**ROI: {:.0}%**", m.roi_percent)?;
        if m.payback_period_months > 0.0 {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "**Payback: {:.1} months**",
                m.payback_period_months
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        if report.insights.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Key Insights")?;
        writeln!(self.writer)?;
        for insight in &report.insights {
            writeln!(self.writer, "- {insight}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        self.print_header()?;
        self.print_call_volume(report)?;
        self.print_cost_table(report)?;
        self.print_returns(report)?;
        self.print_chart(report)?;
        self.print_insights(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Frontdesk ROI Estimate".bold().blue())?;
        writeln!(self.writer, "{}", "======================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_call_volume(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "{}", "Call volume (monthly):".bold())?;
        writeln!(self.writer, "  Total calls: {:.0}", m.total_monthly_calls)?;
        writeln!(
            self.writer,
            "  Missed calls: {}",
            format!("{:.0}", m.total_missed_calls).red()
        )?;
        writeln!(
            self.writer,
            "  Missed sales opportunities: {:.1}",
            m.sales_missed_calls
        )?;
        writeln!(self.writer, "  Call minutes: {:.0}", m.total_minutes)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_cost_table(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Monthly cost", "Amount"]);
        table.add_row(vec![
            "Human receptionist".to_string(),
            format!("${:.2}", m.human_cost),
        ]);
        table.add_row(vec![
            "Service subscription".to_string(),
            format!("${:.2}", m.ai_base_cost),
        ]);
        table.add_row(vec![
            "Service usage".to_string(),
            format!("${:.2}", m.ai_usage_cost),
        ]);
        table.add_row(vec![
            "Service total".to_string(),
            format!("${:.2}", m.ai_total_monthly_cost),
        ]);
        table.add_row(vec![
            "Setup fee (amortized over 12 months)".to_string(),
            format!("${:.2}", m.ai_setup_fee_monthly),
        ]);
        table.add_row(vec![
            "Service total with setup".to_string(),
            format!("${:.2}", m.ai_total_cost_with_setup),
        ]);
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_returns(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        let m = &report.metrics;

        writeln!(self.writer, "{}", "Returns:".bold())?;
        writeln!(
            self.writer,
            "  Cost savings: {} / month (${:.2} / year)",
            money(m.cost_savings),
            m.yearly_cost_savings
        )?;
        writeln!(
            self.writer,
            "  Recovered revenue: {} / month (${:.2} / year)",
            money(m.potential_revenue),
            m.yearly_potential_revenue
        )?;
        writeln!(
            self.writer,
            "  Net benefit: {} / month (${:.2} / year)",
            money(m.net_benefit),
            m.yearly_net_benefit
        )?;

        let roi_display = format!("{:.0}%", m.roi_percent);
        let roi_display = if m.roi_percent > 0.0 {
            roi_display.green().bold()
        } else {
            roi_display.red().bold()
        };
        writeln!(self.writer, "  ROI: {roi_display}")?;

        if m.payback_period_months > 0.0 {
            let payback = if m.payback_period_months > 12.0 {
                format!("{:.1} years", m.payback_period_months / 12.0)
            } else {
                format!("{:.1} months", m.payback_period_months)
            };
            writeln!(self.writer, "  Payback period: {payback}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_chart(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", format_cost_chart(&report.chart))?;
        Ok(())
    }

    fn print_insights(&mut self, report: &RoiReport) -> anyhow::Result<()> {
        if report.insights.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "Key insights:".bold())?;
        for insight in &report.insights {
            writeln!(self.writer, "  - {insight}")?;
        }
        Ok(())
    }
}

fn money(value: f64) -> ColoredString {
    let text = format!("${value:.2}");
    if value >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

/// Build a writer for the chosen format, targeting a file when an output
/// path is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
    })
}
