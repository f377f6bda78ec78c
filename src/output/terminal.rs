use super::{OutputWriter, RiskReport};
use crate::calculators::ModuleResult;
use crate::formatting::{format_dollars, format_plain, OutputFormatter};
use crate::projection::ProjectionResult;
use crate::risk::{RiskModule, RiskTier};
use anyhow::Result;
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { writer, formatter }
    }

    fn print_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&"=".repeat(title.chars().count()))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_row(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "  {:<38} {}", label, self.formatter.bold(value))?;
        Ok(())
    }

    fn tier_text(&self, tier: RiskTier) -> String {
        let text = tier.to_string();
        match tier {
            RiskTier::Low => self.formatter.success(&text),
            RiskTier::Moderate => self.formatter.warning(&text),
            RiskTier::High => self.formatter.error(&text),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_module(&mut self, result: &ModuleResult) -> Result<()> {
        self.print_header(result.module.title())?;
        for metric in &result.metrics {
            self.print_row(metric.label, &metric.display)?;
        }

        if !result.benchmark_messages.is_empty() {
            writeln!(self.writer)?;
            let icon = self.formatter.emoji("📊", "*");
            writeln!(self.writer, "{} Benchmarks:", icon)?;
            for message in &result.benchmark_messages {
                writeln!(self.writer, "  {}", message)?;
            }
        }

        if let Some(text) = &result.straight_talk {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.formatter.warning(text))?;
        }
        Ok(())
    }

    fn write_risk(&mut self, report: RiskReport<'_>) -> Result<()> {
        let result = report.result;
        self.print_header("Operational Risk Summary")?;
        self.print_row(
            "Total Risk Impact",
            &format_dollars(Some(result.total_risk_dollars)),
        )?;
        self.print_row(
            "Estimated EBITDA Margin",
            &format!("{}%", format_plain(result.ebitda_margin)),
        )?;
        self.print_row("EBITDA", &format_dollars(Some(result.ebitda_value)))?;
        self.print_row(
            "EBITDA at Risk",
            &format!("{}%", result.ebitda_risk_text()),
        )?;

        writeln!(self.writer)?;
        writeln!(self.writer, "{} Breakdown:", self.formatter.emoji("📋", "*"))?;
        for module in RiskModule::ALL {
            let value = match result.loss(module) {
                Some(loss) => format_dollars(Some(loss)),
                None => self.formatter.dim("-"),
            };
            writeln!(self.writer, "  {:<38} {}", module.label(), value)?;
        }

        writeln!(self.writer)?;
        let tier = self.tier_text(result.tier);
        writeln!(
            self.writer,
            "  Risk score {} ({})",
            result.risk_score, tier
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", result.summary)?;
        writeln!(self.writer, "{}", self.formatter.warning(&result.cta))?;
        Ok(())
    }

    fn write_projection(&mut self, result: &ProjectionResult) -> Result<()> {
        let title = match &result.period {
            Some(period) => format!("Profit Projection ({period})"),
            None => "Profit Projection".to_string(),
        };
        self.print_header(&title)?;

        writeln!(
            self.writer,
            "  {:<18} {:>16} {:>16} {:>16}",
            "", "Gross", "Net", "vs Now"
        )?;
        for (label, scenario) in result.results.labelled() {
            let delta = format_dollars(Some(scenario.delta_vs_now));
            let delta = if scenario.delta_vs_now > 0.0 {
                self.formatter.success(&format!("{:>16}", delta))
            } else if scenario.delta_vs_now < 0.0 {
                self.formatter.error(&format!("{:>16}", delta))
            } else {
                format!("{:>16}", delta)
            };
            writeln!(
                self.writer,
                "  {:<18} {:>16} {:>16} {}",
                label,
                format_dollars(Some(scenario.gross)),
                format_dollars(Some(scenario.net)),
                delta
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;
    use crate::projection::project_profit_json;

    #[test]
    fn projection_table_is_plain_without_color() {
        let result = project_profit_json(serde_json::json!({
            "inputs": {"revenue": 500000, "cogs": 200000, "opex": 100000},
            "savings": {"payroll": 50000},
            "ors": {"ebitdaAtRisk": 30000}
        }))
        .unwrap();
        let mut out = Vec::new();
        TerminalWriter::new(&mut out, Box::new(PlainFormatter))
            .write_projection(&result)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Profit Projection\n"));
        assert!(text.contains("Best Case"));
        assert!(text.contains("$280,000"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn risk_percent_keeps_one_decimal() {
        let input = crate::risk::RiskAggregateInput {
            payroll_cost: 400_000.0,
            leadership_drag: 5.0,
            total_revenue: 1_000_000.0,
            ..Default::default()
        };
        let result = crate::risk::aggregate_operational_risk(&input).unwrap();
        let mut out = Vec::new();
        TerminalWriter::new(&mut out, Box::new(PlainFormatter))
            .write_risk(RiskReport {
                input: &input,
                result: &result,
            })
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("10.0%"));
        assert!(text.contains("You're putting 10.0% of your profit at risk"));
    }
}
