use super::{OutputWriter, RiskReport};
use crate::calculators::ModuleResult;
use crate::projection::ProjectionResult;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_module(&mut self, result: &ModuleResult) -> Result<()> {
        self.write_value(result)
    }

    fn write_risk(&mut self, report: RiskReport<'_>) -> Result<()> {
        self.write_value(report.result)
    }

    fn write_projection(&mut self, result: &ProjectionResult) -> Result<()> {
        self.write_value(result)
    }
}
