//! CSV-backed benchmark table.
//!
//! The table keeps every column of the source file in its original order so
//! that an administrative rewrite can be saved without disturbing the schema.
//! Only the metric columns named by [`BenchmarkField`] are interpreted; other
//! columns (certainty annotations, notes) ride along untouched.

use super::row::{BenchmarkField, BenchmarkRow};
use crate::errors::{ClarityError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};
use std::path::Path;

pub const INDUSTRY_COLUMN: &str = "Industry";

/// One exported row: column name to raw cell text.
pub type BenchmarkRecord = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    columns: Vec<String>,
    records: Vec<Vec<String>>,
    industry_index: usize,
}

impl BenchmarkTable {
    /// Parse a table from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let industry_index = find_industry_column(&columns)?;

        let mut records = Vec::new();
        for (line_num, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| ClarityError::Csv {
                message: format!("CSV parse error at line {}: {}", line_num + 2, e),
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }

        let table = Self {
            columns,
            records,
            industry_index,
        };
        table.check_unique_industries().map_err(|dup| ClarityError::Csv {
            message: format!("duplicate industry '{}' in benchmark table", dup),
        })?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| ClarityError::from_io_error(e, Some(path.to_path_buf())))?;
        Self::from_reader(file)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.columns)?;
        for record in &self.records {
            csv_writer.write_record(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| ClarityError::from_io_error(e, Some(path.to_path_buf())))?;
        self.write_to(file)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn industry_of<'a>(&self, record: &'a [String]) -> &'a str {
        record
            .get(self.industry_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Sorted, deduplicated industry names; blank entries are skipped.
    pub fn industries(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| self.industry_of(r))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn row(&self, industry: &str) -> Result<BenchmarkRow> {
        self.records
            .iter()
            .find(|r| self.industry_of(r) == industry)
            .map(|r| self.parse_row(r))
            .unwrap_or_else(|| Err(ClarityError::not_found(industry)))
    }

    pub fn rows(&self) -> Result<BTreeMap<String, BenchmarkRow>> {
        self.records
            .iter()
            .filter(|r| !self.industry_of(r).is_empty())
            .map(|r| self.parse_row(r).map(|row| (row.industry.clone(), row)))
            .collect()
    }

    fn parse_row(&self, record: &[String]) -> Result<BenchmarkRow> {
        let mut row = BenchmarkRow::new(self.industry_of(record));
        for (column, cell) in self.columns.iter().zip(record) {
            let Some(field) = BenchmarkField::for_column(column) else {
                continue;
            };
            // Aliased columns: a blank cell never clears a populated one
            if let Some(value) = parse_cell(&row.industry, column, cell)? {
                row.set(field, Some(value));
            }
        }
        Ok(row)
    }

    /// Every row as column name to cell text, for administrative export.
    pub fn records(&self) -> Vec<BenchmarkRecord> {
        self.records
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(record.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Replace the whole table, keeping the existing column order.
    ///
    /// Keys that are not existing columns are dropped; a record missing an
    /// existing column is rejected so the schema never shrinks.
    pub fn replace_records(&mut self, records: &[BenchmarkRecord]) -> Result<()> {
        let mut projected = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let row = self
                .columns
                .iter()
                .map(|column| {
                    record.get(column).cloned().ok_or_else(|| {
                        ClarityError::validation(
                            column.clone(),
                            format!("missing from updated record {}", index + 1),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            projected.push(row);
        }

        let candidate = Self {
            columns: self.columns.clone(),
            records: projected,
            industry_index: self.industry_index,
        };
        candidate.check_unique_industries().map_err(|dup| {
            ClarityError::validation(INDUSTRY_COLUMN, format!("duplicate industry '{}'", dup))
        })?;
        // Numeric columns must still parse after the edit.
        candidate.rows()?;

        *self = candidate;
        Ok(())
    }

    fn check_unique_industries(&self) -> std::result::Result<(), String> {
        let mut seen = BTreeSet::new();
        for record in &self.records {
            let name = self.industry_of(record);
            if !name.is_empty() && !seen.insert(name) {
                return Err(name.to_string());
            }
        }
        Ok(())
    }
}

fn find_industry_column(columns: &[String]) -> Result<usize> {
    columns
        .iter()
        .position(|c| c == INDUSTRY_COLUMN)
        .ok_or_else(|| ClarityError::Csv {
            message: format!("benchmark table has no '{}' column", INDUSTRY_COLUMN),
        })
}

fn parse_cell(industry: &str, column: &str, cell: &str) -> Result<Option<f64>> {
    let text = cell.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>().map(Some).map_err(|_| {
        ClarityError::internal(format!(
            "benchmark '{}' for industry '{}' is not numeric: '{}'",
            column, industry, text
        ))
    })
}

/// Convert JSON objects (numbers, strings, nulls) into raw records.
pub fn records_from_json(value: serde_json::Value) -> Result<Vec<BenchmarkRecord>> {
    let serde_json::Value::Array(items) = value else {
        return Err(ClarityError::payload("expected a JSON array of benchmark rows"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, json_cell(v)))
                .collect::<BenchmarkRecord>()),
            _ => Err(ClarityError::payload(format!(
                "row {} is not a JSON object",
                index + 1
            ))),
        })
        .collect()
}

fn json_cell(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
