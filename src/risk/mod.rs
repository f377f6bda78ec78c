//! Operational risk aggregation.
//!
//! The aggregator accepts a superset of every module's inputs, runs a
//! simplified loss formula for each module whose inputs are present, and
//! expresses the total as a share of estimated EBITDA. Two scoring
//! strategies sit behind [`RiskStrategy`]: the dollar-based
//! [`EbitdaShareStrategy`] is canonical, and [`ModuleCountStrategy`] supplies
//! the coarse Low/Moderate/High display tier.

mod aggregator;
mod strategy;

pub use aggregator::{aggregate_operational_risk, OperationalRiskAggregator, RiskSettings};
pub use strategy::{EbitdaShareStrategy, ModuleCountStrategy, RiskStrategy};

use crate::io::numeric::{count, number, optional_number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Every field is optional; absent numbers are zero. Numbers may be given
/// as numeric strings and counts as whole-valued floats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAggregateInput {
    pub industry: String,

    // payroll
    #[serde(deserialize_with = "number")]
    pub payroll_cost: f64,
    #[serde(deserialize_with = "number")]
    pub avg_salary: f64,
    #[serde(deserialize_with = "number")]
    pub improvement_rate: f64,

    // customer churn
    #[serde(deserialize_with = "number")]
    pub churn_rate: f64,
    #[serde(deserialize_with = "number")]
    pub desired_improvement: f64,
    #[serde(deserialize_with = "number")]
    pub cac: f64,
    #[serde(deserialize_with = "number")]
    pub avg_revenue: f64,
    #[serde(deserialize_with = "count")]
    pub num_customers: u64,

    #[serde(deserialize_with = "number")]
    pub leadership_drag: f64,

    // workforce productivity
    #[serde(deserialize_with = "number")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "number")]
    pub productive_hours: f64,
    #[serde(deserialize_with = "number")]
    pub target_hours_per_employee: f64,
    #[serde(deserialize_with = "number")]
    pub overtime_hours: f64,

    // deep dive
    #[serde(deserialize_with = "number")]
    pub absenteeism_days: f64,
    #[serde(deserialize_with = "number")]
    pub avg_hours: f64,

    #[serde(deserialize_with = "count")]
    pub total_employees: u32,
    /// Percent of revenue taken as EBITDA; the configured default when absent.
    #[serde(deserialize_with = "optional_number")]
    pub ebitda_margin: Option<f64>,
}

/// Modules that can contribute to the aggregate, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskModule {
    #[serde(rename = "Payroll Waste")]
    PayrollWaste,
    #[serde(rename = "Customer Churn")]
    CustomerChurn,
    #[serde(rename = "Leadership Drag")]
    LeadershipDrag,
    #[serde(rename = "Workforce Productivity")]
    WorkforceProductivity,
    #[serde(rename = "Process Gaps (Deep Dive)")]
    ProcessGaps,
}

impl RiskModule {
    pub const ALL: [RiskModule; 5] = [
        Self::PayrollWaste,
        Self::CustomerChurn,
        Self::LeadershipDrag,
        Self::WorkforceProductivity,
        Self::ProcessGaps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PayrollWaste => "Payroll Waste",
            Self::CustomerChurn => "Customer Churn",
            Self::LeadershipDrag => "Leadership Drag",
            Self::WorkforceProductivity => "Workforce Productivity",
            Self::ProcessGaps => "Process Gaps (Deep Dive)",
        }
    }
}

impl fmt::Display for RiskModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_score(score: f64) -> Self {
        if score <= 40.0 {
            Self::Low
        } else if score <= 80.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// Per-module losses before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RiskExposure {
    pub ebitda_value: f64,
    pub module_losses: BTreeMap<RiskModule, f64>,
}

impl RiskExposure {
    pub fn total_risk(&self) -> f64 {
        self.module_losses.values().sum()
    }

    pub fn contributing_modules(&self) -> usize {
        self.module_losses.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAggregateResult {
    pub ebitda_margin: f64,
    pub ebitda_value: f64,
    pub total_risk_dollars: f64,
    pub ebitda_risk_pct: f64,
    pub module_breakdown: BTreeMap<RiskModule, f64>,
    pub summary: String,
    pub cta: String,
    /// Module-count score, rendered `N/100`.
    pub risk_score: String,
    pub tier: RiskTier,
    pub tier_summary: String,
}

impl RiskAggregateResult {
    pub fn loss(&self, module: RiskModule) -> Option<f64> {
        self.module_breakdown.get(&module).copied()
    }

    /// `ebitda_risk_pct` as shown in narratives and reports.
    pub fn ebitda_risk_text(&self) -> String {
        risk_pct_text(self.ebitda_risk_pct, self.ebitda_value)
    }
}

/// One decimal place, or a bare `0` when there is no EBITDA to measure against.
pub(crate) fn risk_pct_text(pct: f64, ebitda_value: f64) -> String {
    if ebitda_value > 0.0 {
        format!("{:.1}", pct)
    } else {
        "0".to_string()
    }
}
