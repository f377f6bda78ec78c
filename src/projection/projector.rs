use super::{
    CurrentFinancials, ProfitScenario, ProjectionInput, ProjectionResult, ProjectionTotals,
    ScenarioSet,
};
use crate::errors::{ensure_finite, ClarityError, Result};
use tracing::{debug, info_span};

impl CurrentFinancials {
    /// Gross profit: supplied, else revenue minus COGS when both are known.
    pub fn gross_profit(&self) -> Option<f64> {
        self.gross_now.or(match (self.revenue, self.cogs) {
            (Some(revenue), Some(cogs)) => Some(revenue - cogs),
            _ => None,
        })
    }

    /// Net profit: supplied, else gross minus opex, else zero.
    pub fn net_profit(&self) -> f64 {
        if let Some(net) = self.net_now {
            return net;
        }
        match (self.gross_profit(), self.opex) {
            (Some(gross), Some(opex)) => gross - opex,
            _ => 0.0,
        }
    }
}

impl ProfitScenario {
    fn against(gross: f64, net: f64, baseline: f64) -> Self {
        Self {
            gross,
            net,
            delta_vs_now: net - baseline,
        }
    }
}

pub fn project_profit(input: &ProjectionInput) -> Result<ProjectionResult> {
    let _span = info_span!("profit_projection", period = input.period.as_deref()).entered();

    let gp_now = ensure_finite("gross_now", input.inputs.gross_profit().unwrap_or(0.0))?;
    let np_now = ensure_finite("net_now", input.inputs.net_profit())?;
    let total_savings = ensure_finite("total_savings", input.savings.total())?;
    let ors_risk = input.ors.ebitda_at_risk;
    let toggles = input.scenarios;

    let fixes_uplift = if toggles.apply_fixes { total_savings } else { 0.0 };
    let ors_uplift = if toggles.apply_ors { ors_risk } else { 0.0 };
    debug!(gp_now, np_now, fixes_uplift, ors_uplift, "resolved projection baseline");

    let best_net = ensure_finite("best_net", np_now + fixes_uplift + ors_uplift)?;
    let results = ScenarioSet {
        now: ProfitScenario::against(gp_now, np_now, np_now),
        fixes: ProfitScenario::against(gp_now, np_now + fixes_uplift, np_now),
        ors: ProfitScenario::against(gp_now, np_now + ors_uplift, np_now),
        best: ProfitScenario::against(gp_now, best_net, np_now),
    };

    Ok(ProjectionResult {
        period: input.period.clone(),
        computed: ProjectionTotals {
            total_savings,
            ors_ebitda_at_risk: ors_risk,
            apply_fixes: toggles.apply_fixes,
            apply_ors: toggles.apply_ors,
            gp_now,
            np_now,
        },
        results,
    })
}

/// Decode a wire payload, then project.
pub fn project_profit_json(payload: serde_json::Value) -> Result<ProjectionResult> {
    let input: ProjectionInput =
        serde_json::from_value(payload).map_err(|e| ClarityError::payload(e.to_string()))?;
    project_profit(&input)
}
