pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::calculators::ModuleResult;
use crate::formatting::{FormattingConfig, OutputFormatter, PlainFormatter, StyledFormatter};
use crate::io;
use crate::projection::ProjectionResult;
use crate::risk::{RiskAggregateInput, RiskAggregateResult};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" | "text" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Aggregated risk together with the inputs it was computed from.
#[derive(Debug, Clone, Copy)]
pub struct RiskReport<'a> {
    pub input: &'a RiskAggregateInput,
    pub result: &'a RiskAggregateResult,
}

#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Module(&'a ModuleResult),
    Risk(RiskReport<'a>),
    Projection(&'a ProjectionResult),
}

pub trait OutputWriter {
    fn write_module(&mut self, result: &ModuleResult) -> Result<()>;
    fn write_risk(&mut self, report: RiskReport<'_>) -> Result<()>;
    fn write_projection(&mut self, result: &ProjectionResult) -> Result<()>;

    fn write_report(&mut self, report: Report<'_>) -> Result<()> {
        match report {
            Report::Module(result) => self.write_module(result),
            Report::Risk(risk) => self.write_risk(risk),
            Report::Projection(result) => self.write_projection(result),
        }
    }
}

pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color || config.emoji {
        Box::new(StyledFormatter::new(config))
    } else {
        Box::new(PlainFormatter)
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatter_for(formatting))),
    }
}

/// Render without styling, as written to files.
pub fn render_to_string(report: Report<'_>, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), FormattingConfig::plain());
        writer.write_report(report)?;
    }
    Ok(String::from_utf8(buffer)?)
}

/// Write to `output_file` (unstyled) or stdout.
pub fn emit(
    report: Report<'_>,
    format: OutputFormat,
    output_file: Option<&Path>,
    formatting: FormattingConfig,
) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                io::ensure_dir(parent)?;
            }
            let content = render_to_string(report, format)?;
            io::write_file(path, &content)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, Box::new(stdout.lock()), formatting);
            writer.write_report(report)?;
        }
    }
    Ok(())
}
