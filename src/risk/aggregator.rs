use super::strategy::{EbitdaShareStrategy, ModuleCountStrategy, RiskStrategy};
use super::{
    risk_pct_text, RiskAggregateInput, RiskAggregateResult, RiskExposure, RiskModule, RiskTier,
};
use crate::errors::{ensure_finite, Result};
use crate::formatting::{format_plain, group_thousands, round_to};
use std::collections::BTreeMap;
use tracing::{debug, info_span};

/// Absent days are spread over a 20-day working month.
const WORKING_DAYS_PER_MONTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSettings {
    pub default_ebitda_margin: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            default_ebitda_margin: 20.0,
        }
    }
}

#[derive(Clone)]
pub struct OperationalRiskAggregator {
    settings: RiskSettings,
    canonical: Box<dyn RiskStrategy>,
    display: Box<dyn RiskStrategy>,
}

impl Default for OperationalRiskAggregator {
    fn default() -> Self {
        Self::new(RiskSettings::default())
    }
}

impl OperationalRiskAggregator {
    pub fn new(settings: RiskSettings) -> Self {
        Self {
            settings,
            canonical: Box::new(EbitdaShareStrategy),
            display: Box::new(ModuleCountStrategy::default()),
        }
    }

    /// Swap the strategy that produces the displayed score and tier.
    #[must_use]
    pub fn with_display_strategy(mut self, strategy: Box<dyn RiskStrategy>) -> Self {
        self.display = strategy;
        self
    }

    pub fn settings(&self) -> RiskSettings {
        self.settings
    }

    pub fn margin(&self, input: &RiskAggregateInput) -> f64 {
        input
            .ebitda_margin
            .unwrap_or(self.settings.default_ebitda_margin)
    }

    /// Losses for every module whose inputs are present.
    pub fn exposure(&self, input: &RiskAggregateInput) -> RiskExposure {
        let employees = f64::from(input.total_employees);
        let payroll_cost = if input.payroll_cost <= 0.0 {
            let estimate = input.avg_salary * employees;
            debug!(estimate, "estimated payroll cost from average salary");
            estimate
        } else {
            input.payroll_cost
        };

        let mut losses = BTreeMap::new();
        let mut record = |module: RiskModule, loss: f64| {
            losses.insert(module, round_to(loss, 2));
        };

        if input.improvement_rate > 0.0 {
            record(
                RiskModule::PayrollWaste,
                payroll_cost * input.improvement_rate / 100.0,
            );
        }
        if input.churn_rate > 0.0 && input.avg_revenue > 0.0 && input.num_customers > 0 {
            record(
                RiskModule::CustomerChurn,
                input.churn_rate / 100.0 * input.avg_revenue * input.num_customers as f64,
            );
        }
        if input.leadership_drag > 0.0 {
            record(
                RiskModule::LeadershipDrag,
                payroll_cost * input.leadership_drag / 100.0,
            );
        }
        if input.productive_hours > 0.0
            && input.target_hours_per_employee > 0.0
            && input.total_employees > 0
        {
            let expected_hours = input.target_hours_per_employee * employees;
            let gap = 1.0 - input.productive_hours / expected_hours;
            record(RiskModule::WorkforceProductivity, (gap * payroll_cost).max(0.0));
        }
        if input.avg_hours > 0.0 && input.absenteeism_days > 0.0 {
            record(
                RiskModule::ProcessGaps,
                input.absenteeism_days / WORKING_DAYS_PER_MONTH * input.avg_salary * employees,
            );
        }

        RiskExposure {
            ebitda_value: input.total_revenue * self.margin(input) / 100.0,
            module_losses: losses,
        }
    }

    pub fn aggregate(&self, input: &RiskAggregateInput) -> Result<RiskAggregateResult> {
        let _span = info_span!("risk_aggregate", strategy = self.canonical.name()).entered();
        let margin = ensure_finite("ebitda_margin", self.margin(input))?;
        let exposure = self.exposure(input);

        let total_risk = ensure_finite("total_risk", round_to(exposure.total_risk(), 2))?;
        let ebitda_value = ensure_finite("ebitda_value", round_to(exposure.ebitda_value, 2))?;
        let ebitda_risk_pct = ensure_finite("ebitda_risk_pct", self.canonical.score(&exposure))?;
        let display_score = ensure_finite("risk_score", self.display.score(&exposure))?;
        let tier = self
            .display
            .tier(&exposure)
            .unwrap_or_else(|| RiskTier::from_score(display_score));
        debug!(
            modules = exposure.contributing_modules(),
            total_risk, ebitda_risk_pct, "aggregated operational risk"
        );

        Ok(RiskAggregateResult {
            ebitda_margin: margin,
            ebitda_value,
            total_risk_dollars: total_risk,
            ebitda_risk_pct,
            summary: format!(
                "You're putting {}% of your profit at risk due to operational inefficiencies.",
                risk_pct_text(ebitda_risk_pct, ebitda_value)
            ),
            cta: format!(
                "If nothing changes, you'll forfeit ${} in profit this year.",
                group_thousands(total_risk, 2)
            ),
            risk_score: format!("{}/100", format_plain(display_score)),
            tier,
            tier_summary: format!(
                "Based on completed modules, your operational risk is rated {}.",
                tier
            ),
            module_breakdown: exposure.module_losses,
        })
    }
}

/// Aggregate with the default 20% margin and the standard strategies.
pub fn aggregate_operational_risk(input: &RiskAggregateInput) -> Result<RiskAggregateResult> {
    OperationalRiskAggregator::default().aggregate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClarityError;

    #[test]
    fn estimates_payroll_without_ebitda() {
        let input = RiskAggregateInput {
            improvement_rate: 10.0,
            avg_salary: 5_000.0,
            total_employees: 20,
            ..Default::default()
        };
        let result = aggregate_operational_risk(&input).unwrap();
        assert_eq!(result.ebitda_value, 0.0);
        assert_eq!(result.total_risk_dollars, 10_000.0);
        assert_eq!(result.ebitda_risk_pct, 0.0);
        assert_eq!(result.ebitda_margin, 20.0);
        assert_eq!(
            result.module_breakdown,
            BTreeMap::from([(RiskModule::PayrollWaste, 10_000.0)])
        );
        assert_eq!(result.risk_score, "20/100");
        assert_eq!(result.tier, RiskTier::Low);
        assert_eq!(
            result.cta,
            "If nothing changes, you'll forfeit $10,000.00 in profit this year."
        );
    }

    #[test]
    fn supplied_payroll_cost_wins() {
        let input = RiskAggregateInput {
            payroll_cost: 400_000.0,
            avg_salary: 5_000.0,
            total_employees: 20,
            leadership_drag: 5.0,
            total_revenue: 1_000_000.0,
            ..Default::default()
        };
        let result = aggregate_operational_risk(&input).unwrap();
        assert_eq!(result.loss(RiskModule::LeadershipDrag), Some(20_000.0));
        assert_eq!(result.ebitda_value, 200_000.0);
        assert_eq!(result.ebitda_risk_pct, 10.0);
        assert_eq!(
            result.summary,
            "You're putting 10.0% of your profit at risk due to operational inefficiencies."
        );
    }

    #[test]
    fn zero_ebitda_reports_bare_zero_percent() {
        let input = RiskAggregateInput {
            improvement_rate: 10.0,
            avg_salary: 5_000.0,
            total_employees: 20,
            ..Default::default()
        };
        let result = aggregate_operational_risk(&input).unwrap();
        assert_eq!(result.ebitda_value, 0.0);
        assert_eq!(result.ebitda_risk_text(), "0");
        assert!(result.summary.starts_with("You're putting 0% of"));
    }

    #[test]
    fn overperforming_workforce_contributes_zero() {
        let input = RiskAggregateInput {
            payroll_cost: 100_000.0,
            productive_hours: 2_000.0,
            target_hours_per_employee: 160.0,
            total_employees: 10,
            ..Default::default()
        };
        let exposure = OperationalRiskAggregator::default().exposure(&input);
        assert_eq!(
            exposure.module_losses.get(&RiskModule::WorkforceProductivity),
            Some(&0.0)
        );
    }

    #[test]
    fn process_gaps_need_hours_and_absence() {
        let base = RiskAggregateInput {
            avg_salary: 60_000.0,
            total_employees: 10,
            absenteeism_days: 2.0,
            ..Default::default()
        };
        let aggregator = OperationalRiskAggregator::default();
        assert!(aggregator.exposure(&base).module_losses.is_empty());

        let with_hours = RiskAggregateInput {
            avg_hours: 150.0,
            ..base
        };
        assert_eq!(
            aggregator
                .exposure(&with_hours)
                .module_losses
                .get(&RiskModule::ProcessGaps),
            Some(&60_000.0)
        );
    }

    #[test]
    fn configured_margin_applies_when_absent() {
        let aggregator = OperationalRiskAggregator::new(RiskSettings {
            default_ebitda_margin: 10.0,
        });
        let input = RiskAggregateInput {
            total_revenue: 100_000.0,
            ..Default::default()
        };
        assert_eq!(aggregator.aggregate(&input).unwrap().ebitda_value, 10_000.0);

        let explicit = RiskAggregateInput {
            ebitda_margin: Some(30.0),
            ..input
        };
        assert_eq!(aggregator.aggregate(&explicit).unwrap().ebitda_value, 30_000.0);
    }

    #[test]
    fn non_finite_figures_are_internal_errors() {
        let input = RiskAggregateInput {
            total_revenue: f64::INFINITY,
            ..Default::default()
        };
        let err = aggregate_operational_risk(&input).unwrap_err();
        assert!(matches!(err, ClarityError::Internal { .. }));
    }
}
