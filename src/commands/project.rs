use super::CommandContext;
use crate::io;
use crate::output::{self, OutputFormat, Report};
use crate::projection::project_profit_json;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ProjectConfig {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn project_scenarios(config: ProjectConfig, context: &CommandContext) -> Result<()> {
    let payload = io::read_json_input(&config.input)?;
    let result = project_profit_json(payload).context("Profit projection failed")?;

    output::emit(
        Report::Projection(&result),
        context.resolve_format(config.format),
        config.output.as_deref(),
        context.formatting,
    )
}
