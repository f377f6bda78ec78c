use super::row::BenchmarkRow;
use super::table::{BenchmarkRecord, BenchmarkTable};
use crate::errors::{ClarityError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read access to the industry reference table.
///
/// Implementations never hand out mutable access; calculators only read.
pub trait BenchmarkRepository: Send + Sync {
    /// Fails with [`ClarityError::NotFound`] when the industry has no row.
    fn lookup(&self, industry: &str) -> Result<BenchmarkRow>;

    /// Sorted, deduplicated industry names.
    fn all_industries(&self) -> Result<Vec<String>>;

    fn all_rows(&self) -> Result<BTreeMap<String, BenchmarkRow>>;
}

/// Repository backed by a CSV file that is re-read on every call, so edits
/// made by the administrative update path are visible immediately.
#[derive(Debug, Clone)]
pub struct CsvBenchmarkRepository {
    path: PathBuf,
}

impl CsvBenchmarkRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> Result<BenchmarkTable> {
        debug!(path = %self.path.display(), "loading benchmark table");
        BenchmarkTable::load(&self.path)
    }

    /// Rewrite the full table from edited records, preserving column order.
    pub fn update(&self, records: &[BenchmarkRecord]) -> Result<()> {
        let mut table = self.table()?;
        table.replace_records(records)?;
        table.save(&self.path)?;
        debug!(rows = table.len(), "benchmark table rewritten");
        Ok(())
    }
}

impl BenchmarkRepository for CsvBenchmarkRepository {
    fn lookup(&self, industry: &str) -> Result<BenchmarkRow> {
        self.table()?.row(industry)
    }

    fn all_industries(&self) -> Result<Vec<String>> {
        Ok(self.table()?.industries())
    }

    fn all_rows(&self) -> Result<BTreeMap<String, BenchmarkRow>> {
        self.table()?.rows()
    }
}

/// Fixed set of rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBenchmarkRepository {
    rows: BTreeMap<String, BenchmarkRow>,
}

impl InMemoryBenchmarkRepository {
    pub fn new(rows: impl IntoIterator<Item = BenchmarkRow>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .filter(|row| !row.industry.is_empty())
                .map(|row| (row.industry.clone(), row))
                .collect(),
        }
    }
}

impl BenchmarkRepository for InMemoryBenchmarkRepository {
    fn lookup(&self, industry: &str) -> Result<BenchmarkRow> {
        self.rows
            .get(industry)
            .cloned()
            .ok_or_else(|| ClarityError::not_found(industry))
    }

    fn all_industries(&self) -> Result<Vec<String>> {
        Ok(self.rows.keys().cloned().collect())
    }

    fn all_rows(&self) -> Result<BTreeMap<String, BenchmarkRow>> {
        Ok(self.rows.clone())
    }
}
