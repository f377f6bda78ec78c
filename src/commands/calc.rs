use super::CommandContext;
use crate::calculators::CalculatorKind;
use crate::io;
use crate::output::{self, OutputFormat, Report};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CalcConfig {
    pub module: CalculatorKind,
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn calculate_module(config: CalcConfig, context: &CommandContext) -> Result<()> {
    let payload = io::read_json_input(&config.input)?;
    let registry = context.registry();
    let repository = context.repository();

    let result = registry
        .run(config.module, &repository, payload)
        .with_context(|| format!("{} calculation failed", config.module.title()))?;

    output::emit(
        Report::Module(&result),
        context.resolve_format(config.format),
        config.output.as_deref(),
        context.formatting,
    )
}

/// One line per calculator with its visibility.
pub fn list_calculators(context: &CommandContext) -> Result<()> {
    let registry = context.registry();
    for kind in CalculatorKind::ALL {
        let state = if registry.contains(kind) {
            "visible"
        } else {
            "hidden"
        };
        println!("{:<24} {}", kind.slug(), state);
    }
    Ok(())
}
