use super::CommandContext;
use crate::errors::ClarityError;
use crate::io;
use crate::output::{self, OutputFormat, Report, RiskReport};
use crate::risk::{OperationalRiskAggregator, RiskAggregateInput};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AssessRiskConfig {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn assess_risk(config: AssessRiskConfig, context: &CommandContext) -> Result<()> {
    let payload = io::read_json_input(&config.input)?;
    let input: RiskAggregateInput =
        serde_json::from_value(payload).map_err(|e| ClarityError::payload(e.to_string()))?;

    let aggregator = OperationalRiskAggregator::new(context.config.risk_settings());
    let result = aggregator
        .aggregate(&input)
        .context("Operational risk aggregation failed")?;

    output::emit(
        Report::Risk(RiskReport {
            input: &input,
            result: &result,
        }),
        context.resolve_format(config.format),
        config.output.as_deref(),
        context.formatting,
    )
}
