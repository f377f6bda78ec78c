//! Module calculators.
//!
//! Each calculator combines a validated caller input with one industry's
//! benchmark row and produces a [`ModuleResult`]: ordered metrics (raw value
//! plus display string) and benchmark commentary. The arithmetic lives in a
//! pure `*Figures::compute` function per module so it can be exercised
//! without validation or lookup.
//!
//! Calculators are dispatched through an explicit [`CalculatorRegistry`]
//! built once by the caller:
//!
//! ```rust
//! use clarity::benchmarks::{BenchmarkField, BenchmarkRow, InMemoryBenchmarkRepository};
//! use clarity::calculators::{CalculatorKind, CalculatorRegistry};
//!
//! let repo = InMemoryBenchmarkRepository::new([BenchmarkRow::new("Retail")
//!     .with(BenchmarkField::LeadershipDragImpact, 10.0)]);
//! let registry = CalculatorRegistry::standard();
//! let payload = serde_json::json!({
//!     "industry": "Retail",
//!     "total_employees": 10,
//!     "avg_salary": 60000.0,
//!     "leadership_drag": 15.0
//! });
//! let result = registry.run(CalculatorKind::LeadershipDrag, &repo, payload).unwrap();
//! assert_eq!(result.display("annual_loss"), Some("AUD $90,000"));
//! ```

pub mod customer_churn;
pub mod leadership_drag;
pub mod payroll_waste;
pub mod productivity_dive;
mod validate;
pub mod workforce_productivity;

pub use customer_churn::{CustomerChurnFigures, CustomerChurnInput};
pub use leadership_drag::{LeadershipDragFigures, LeadershipDragInput};
pub use payroll_waste::{PayrollWasteFigures, PayrollWasteInput};
pub use productivity_dive::{ProductivityDiveFigures, ProductivityDiveInput};
pub use workforce_productivity::{WorkforceProductivityFigures, WorkforceProductivityInput};

use crate::benchmarks::{BenchmarkRepository, BenchmarkRow};
use crate::errors::{ensure_finite, ClarityError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::info_span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    PayrollWaste,
    CustomerChurn,
    LeadershipDrag,
    WorkforceProductivity,
    ProductivityDive,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 5] = [
        Self::PayrollWaste,
        Self::CustomerChurn,
        Self::LeadershipDrag,
        Self::WorkforceProductivity,
        Self::ProductivityDive,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::PayrollWaste => "payroll-waste",
            Self::CustomerChurn => "customer-churn",
            Self::LeadershipDrag => "leadership-drag",
            Self::WorkforceProductivity => "workforce-productivity",
            Self::ProductivityDive => "productivity-dive",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PayrollWaste => "Payroll Waste",
            Self::CustomerChurn => "Customer Churn",
            Self::LeadershipDrag => "Leadership Drag",
            Self::WorkforceProductivity => "Workforce Productivity",
            Self::ProductivityDive => "Productivity Deep-Dive",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculatorKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.slug()).collect();
                format!("unknown module '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// One computed figure with its display rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub display: String,
}

impl Metric {
    pub fn new(key: &'static str, label: &'static str, value: f64, display: String) -> Self {
        Self {
            key,
            label,
            value,
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleResult {
    pub module: CalculatorKind,
    pub metrics: Vec<Metric>,
    pub benchmark_messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub straight_talk: Option<String>,
}

impl ModuleResult {
    pub fn new(module: CalculatorKind, metrics: Vec<Metric>) -> Self {
        Self {
            module,
            metrics,
            benchmark_messages: Vec::new(),
            straight_talk: None,
        }
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.benchmark_messages = messages;
        self
    }

    #[must_use]
    pub fn with_straight_talk(mut self, text: String) -> Self {
        self.straight_talk = Some(text);
        self
    }

    pub fn metric(&self, key: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.key == key)
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.metric(key).map(|m| m.value)
    }

    pub fn display(&self, key: &str) -> Option<&str> {
        self.metric(key).map(|m| m.display.as_str())
    }

    fn check_finite(self) -> Result<Self> {
        for metric in &self.metrics {
            ensure_finite(metric.key, metric.value)?;
        }
        Ok(self)
    }
}

/// Caller-supplied input for one calculator.
pub trait ModuleInput: DeserializeOwned {
    const KIND: CalculatorKind;

    fn industry(&self) -> &str;

    /// Range checks, run before any lookup or arithmetic.
    fn validate(&self) -> Result<()>;

    fn calculate(&self, benchmarks: &BenchmarkRow) -> ModuleResult;
}

/// Validate, resolve the industry, then compute.
pub fn run_module<I: ModuleInput>(
    input: &I,
    repository: &dyn BenchmarkRepository,
) -> Result<ModuleResult> {
    let _span = info_span!("calculator", kind = %I::KIND).entered();
    input.validate()?;
    let row = repository.lookup(input.industry())?;
    input.calculate(&row).check_finite()
}

pub type CalculatorFn = fn(&dyn BenchmarkRepository, serde_json::Value) -> Result<ModuleResult>;

fn dispatch<I: ModuleInput>(
    repository: &dyn BenchmarkRepository,
    payload: serde_json::Value,
) -> Result<ModuleResult> {
    let input: I =
        serde_json::from_value(payload).map_err(|e| ClarityError::payload(e.to_string()))?;
    run_module(&input, repository)
}

/// Operation name to calculator mapping.
#[derive(Clone, Default)]
pub struct CalculatorRegistry {
    entries: BTreeMap<CalculatorKind, CalculatorFn>,
}

impl CalculatorRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All five module calculators.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register::<PayrollWasteInput>();
        registry.register::<CustomerChurnInput>();
        registry.register::<LeadershipDragInput>();
        registry.register::<WorkforceProductivityInput>();
        registry.register::<ProductivityDiveInput>();
        registry
    }

    pub fn register<I: ModuleInput>(&mut self) {
        self.entries.insert(I::KIND, dispatch::<I>);
    }

    /// Remove a calculator so `run` refuses it.
    pub fn hide(&mut self, kind: CalculatorKind) {
        self.entries.remove(&kind);
    }

    pub fn contains(&self, kind: CalculatorKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = CalculatorKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn get(&self, kind: CalculatorKind) -> Option<CalculatorFn> {
        self.entries.get(&kind).copied()
    }

    pub fn run(
        &self,
        kind: CalculatorKind,
        repository: &dyn BenchmarkRepository,
        payload: serde_json::Value,
    ) -> Result<ModuleResult> {
        let calculator = self.get(kind).ok_or_else(|| {
            ClarityError::validation("module", format!("calculator '{}' is not enabled", kind))
        })?;
        calculator(repository, payload)
    }
}

impl fmt::Debug for CalculatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// `x / y`, or 0 when the denominator is zero.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Benchmark value for commentary, `N/A` when absent.
pub(crate) fn benchmark_text(value: Option<f64>) -> String {
    value
        .map(crate::formatting::format_plain)
        .unwrap_or_else(|| "N/A".to_string())
}
