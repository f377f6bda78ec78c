//! Industry benchmark reference data.
//!
//! The table is loaded from CSV and interpreted into strongly-typed
//! [`BenchmarkRow`]s. Calculators depend only on the [`BenchmarkRepository`]
//! trait; [`CsvBenchmarkRepository`] re-reads its file on every call so an
//! administrative rewrite is picked up without invalidation.

mod defaults;
mod repository;
mod row;
mod table;

pub use defaults::IndustryDefaults;
pub use repository::{BenchmarkRepository, CsvBenchmarkRepository, InMemoryBenchmarkRepository};
pub use row::{BenchmarkField, BenchmarkRow};
pub use table::{records_from_json, BenchmarkRecord, BenchmarkTable, INDUSTRY_COLUMN};
