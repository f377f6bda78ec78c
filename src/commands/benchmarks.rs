use super::CommandContext;
use crate::benchmarks::{records_from_json, BenchmarkRepository, IndustryDefaults};
use crate::io;
use anyhow::{Context, Result};
use std::path::Path;

pub fn list_industries(context: &CommandContext) -> Result<()> {
    let industries = context
        .repository()
        .all_industries()
        .with_context(|| format!("Failed to load {}", context.benchmarks_path.display()))?;
    for industry in industries {
        println!("{}", industry);
    }
    Ok(())
}

pub fn show_defaults(industry: &str, context: &CommandContext) -> Result<()> {
    let row = context.repository().lookup(industry)?;
    let defaults = IndustryDefaults::from_row(&row);
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    Ok(())
}

pub fn export_benchmarks(output: Option<&Path>, context: &CommandContext) -> Result<()> {
    let table = context.repository().table()?;
    let json = serde_json::to_string_pretty(&table.records())?;
    match output {
        Some(path) => {
            io::write_file(path, &json)?;
            log::info!("Exported {} benchmark rows to {}", table.len(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

pub fn update_benchmarks(input: &Path, context: &CommandContext) -> Result<()> {
    let payload = io::read_json_input(input)?;
    let records = records_from_json(payload)?;
    let repository = context.repository();
    repository
        .update(&records)
        .with_context(|| format!("Failed to update {}", repository.path().display()))?;
    println!(
        "Updated {} benchmark rows in {}",
        records.len(),
        repository.path().display()
    );
    Ok(())
}
