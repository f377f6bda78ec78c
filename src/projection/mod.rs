//! Profit scenario projection.
//!
//! Given current-period financials, the savings identified by the module
//! calculators and the EBITDA-at-risk figure, [`project_profit`] produces
//! four scenarios: today, fixes applied, operational risk eliminated, and
//! both. The wire format keeps the camelCase names used by existing
//! dashboards.

mod projector;

pub use projector::{project_profit, project_profit_json};

use crate::io::numeric::{lenient_amount, optional_number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    #[serde(default)]
    pub period: Option<String>,
    pub inputs: CurrentFinancials,
    #[serde(default)]
    pub savings: SavingsBreakdown,
    #[serde(default)]
    pub ors: OrsFigures,
    #[serde(default)]
    pub scenarios: ScenarioToggles,
}

/// Current-period figures; precomputed profits take precedence when given.
/// Numeric strings are accepted, anything else non-numeric is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentFinancials {
    #[serde(default, deserialize_with = "optional_number")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub cogs: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub opex: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub gross_now: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub net_now: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SavingsBreakdown {
    #[serde(deserialize_with = "lenient_amount")]
    pub payroll: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub churn: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub workforce: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub deep_dive: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub leadership: f64,
}

impl SavingsBreakdown {
    pub fn total(&self) -> f64 {
        self.payroll + self.churn + self.workforce + self.deep_dive + self.leadership
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrsFigures {
    #[serde(deserialize_with = "lenient_amount")]
    pub ebitda_at_risk: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioToggles {
    #[serde(rename = "applyFixes")]
    pub apply_fixes: bool,
    #[serde(rename = "applyORS")]
    pub apply_ors: bool,
}

impl Default for ScenarioToggles {
    fn default() -> Self {
        Self {
            apply_fixes: true,
            apply_ors: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitScenario {
    pub gross: f64,
    pub net: f64,
    pub delta_vs_now: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub now: ProfitScenario,
    pub fixes: ProfitScenario,
    pub ors: ProfitScenario,
    pub best: ProfitScenario,
}

impl ScenarioSet {
    /// Scenarios with display names, in report order.
    pub fn labelled(&self) -> [(&'static str, ProfitScenario); 4] {
        [
            ("Now", self.now),
            ("Fixes Applied", self.fixes),
            ("Risk Eliminated", self.ors),
            ("Best Case", self.best),
        ]
    }
}

/// Resolved inputs echoed back for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionTotals {
    pub total_savings: f64,
    pub ors_ebitda_at_risk: f64,
    pub apply_fixes: bool,
    #[serde(rename = "applyORS")]
    pub apply_ors: bool,
    pub gp_now: f64,
    pub np_now: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub period: Option<String>,
    pub computed: ProjectionTotals,
    pub results: ScenarioSet,
}
