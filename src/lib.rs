// Export modules for library usage
pub mod benchmarks;
pub mod calculators;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod output;
pub mod projection;
pub mod risk;

// Re-export commonly used types
pub use crate::benchmarks::{
    BenchmarkField, BenchmarkRepository, BenchmarkRow, BenchmarkTable, CsvBenchmarkRepository,
    InMemoryBenchmarkRepository, IndustryDefaults,
};

pub use crate::calculators::{
    run_module, CalculatorKind, CalculatorRegistry, Metric, ModuleInput, ModuleResult,
};

pub use crate::errors::{ClarityError, ErrorCode};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::projection::{project_profit, ProjectionInput, ProjectionResult};

pub use crate::risk::{
    aggregate_operational_risk, OperationalRiskAggregator, RiskAggregateInput,
    RiskAggregateResult, RiskTier,
};
