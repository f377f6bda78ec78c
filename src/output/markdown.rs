use super::{OutputWriter, RiskReport};
use crate::calculators::ModuleResult;
use crate::formatting::{format_dollars, format_plain};
use crate::projection::ProjectionResult;
use crate::risk::{RiskAggregateInput, RiskModule};
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_item(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "- **{label}:** {value}")?;
        Ok(())
    }

    fn write_section(&mut self, heading: &str) -> Result<()> {
        writeln!(self.writer, "## {heading}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs_summary(&mut self, input: &RiskAggregateInput) -> Result<()> {
        self.write_section("Inputs Summary")?;
        writeln!(
            self.writer,
            "_Some values may reflect benchmark data for the selected industry._"
        )?;
        writeln!(self.writer)?;

        let industry = if input.industry.is_empty() {
            "N/A"
        } else {
            input.industry.as_str()
        };
        let percent = |v: f64| format!("{}%", format_plain(v));

        writeln!(self.writer, "### Business Context")?;
        writeln!(self.writer)?;
        self.write_item("Industry", industry)?;
        self.write_item("Total Employees", &input.total_employees.to_string())?;
        self.write_item("Average Salary", &format_dollars(Some(input.avg_salary)))?;
        self.write_item("Total Revenue", &format_dollars(Some(input.total_revenue)))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Customer Economics")?;
        writeln!(self.writer)?;
        self.write_item("Number of Customers", &input.num_customers.to_string())?;
        self.write_item(
            "Average Revenue per Customer",
            &format_dollars(Some(input.avg_revenue)),
        )?;
        self.write_item("CAC", &format_dollars(Some(input.cac)))?;
        self.write_item("Churn Rate", &percent(input.churn_rate))?;
        self.write_item("Desired Improvement", &percent(input.desired_improvement))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Workforce & Operations")?;
        writeln!(self.writer)?;
        self.write_item("Leadership Drag", &percent(input.leadership_drag))?;
        self.write_item("Productive Hours", &format_plain(input.productive_hours))?;
        self.write_item(
            "Target Hours per Employee",
            &format_plain(input.target_hours_per_employee),
        )?;
        self.write_item("Average Hours", &format_plain(input.avg_hours))?;
        self.write_item("Overtime Hours", &format_plain(input.overtime_hours))?;
        self.write_item("Absenteeism Days", &format_plain(input.absenteeism_days))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Calculated & Efficiency Factors")?;
        writeln!(self.writer)?;
        self.write_item("Payroll Cost", &format_dollars(Some(input.payroll_cost)))?;
        self.write_item("Improvement Rate", &percent(input.improvement_rate))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_module(&mut self, result: &ModuleResult) -> Result<()> {
        self.write_header(result.module.title())?;

        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for metric in &result.metrics {
            writeln!(self.writer, "| {} | {} |", metric.label, metric.display)?;
        }
        writeln!(self.writer)?;

        if !result.benchmark_messages.is_empty() {
            self.write_section("Benchmark Comparison")?;
            for message in &result.benchmark_messages {
                writeln!(self.writer, "- {message}")?;
            }
            writeln!(self.writer)?;
        }

        if let Some(text) = &result.straight_talk {
            self.write_section("Straight Talk")?;
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn write_risk(&mut self, report: RiskReport<'_>) -> Result<()> {
        let result = report.result;
        self.write_header("Operational Risk Summary")?;
        writeln!(
            self.writer,
            "Snapshot of your financial risk due to operational inefficiencies."
        )?;
        writeln!(self.writer)?;

        self.write_section("EBITDA at Risk")?;
        self.write_item(
            "Total Risk Impact",
            &format_dollars(Some(result.total_risk_dollars)),
        )?;
        self.write_item(
            "Estimated EBITDA Margin",
            &format!("{}%", format_plain(result.ebitda_margin)),
        )?;
        self.write_item(
            "EBITDA at Risk",
            &format!("{}%", result.ebitda_risk_text()),
        )?;
        writeln!(self.writer)?;

        self.write_section("Risk Breakdown")?;
        for module in RiskModule::ALL {
            let label = match module {
                RiskModule::ProcessGaps => "Process Gaps",
                other => other.label(),
            };
            self.write_item(label, &format_dollars(result.loss(module)))?;
        }
        writeln!(self.writer)?;

        self.write_section("Risk Tier")?;
        self.write_item("Operational Risk Score", &result.risk_score)?;
        self.write_item("Risk Tier", &result.tier.to_string())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.summary)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.cta)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.tier_summary)?;
        writeln!(self.writer)?;

        self.write_inputs_summary(report.input)
    }

    fn write_projection(&mut self, result: &ProjectionResult) -> Result<()> {
        let title = match &result.period {
            Some(period) => format!("Profit Projection: {period}"),
            None => "Profit Projection".to_string(),
        };
        self.write_header(&title)?;

        writeln!(self.writer, "| Scenario | Gross | Net | Change vs Now |")?;
        writeln!(self.writer, "|----------|-------|-----|---------------|")?;
        for (label, scenario) in result.results.labelled() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                label,
                format_dollars(Some(scenario.gross)),
                format_dollars(Some(scenario.net)),
                format_dollars(Some(scenario.delta_vs_now)),
            )?;
        }
        writeln!(self.writer)?;

        let applied = |on: bool| if on { "applied" } else { "not applied" };
        let computed = &result.computed;
        self.write_item(
            "Total Savings",
            &format!(
                "{} ({})",
                format_dollars(Some(computed.total_savings)),
                applied(computed.apply_fixes)
            ),
        )?;
        self.write_item(
            "EBITDA at Risk",
            &format!(
                "{} ({})",
                format_dollars(Some(computed.ors_ebitda_at_risk)),
                applied(computed.apply_ors)
            ),
        )?;
        Ok(())
    }
}
