use super::{ratio_or_zero, validate, CalculatorKind, Metric, ModuleInput, ModuleResult};
use crate::benchmarks::BenchmarkRow;
use crate::errors::Result;
use crate::formatting::{format_currency_cents, format_percent, round_to};
use crate::io::numeric::{count, number};
use serde::{Deserialize, Serialize};

/// Hours lost per absent day.
pub const HOURS_PER_WORKDAY: f64 = 7.6;
/// Utilisation uplift targeted by the opportunity figure.
pub const UTILISATION_BOOST: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceProductivityInput {
    pub industry: String,
    #[serde(deserialize_with = "number")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "number")]
    pub payroll_cost: f64,
    #[serde(deserialize_with = "count")]
    pub total_employees: u32,
    #[serde(deserialize_with = "number")]
    pub productive_hours: f64,
    #[serde(deserialize_with = "number")]
    pub target_hours_per_employee: f64,
    #[serde(default, deserialize_with = "number")]
    pub overtime_hours: f64,
    #[serde(default, deserialize_with = "number")]
    pub absenteeism_days: f64,
}

/// Ratios are zero wherever their denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkforceProductivityFigures {
    pub total_target_hours: f64,
    pub lost_hours: f64,
    pub extra_hours: f64,
    pub revenue_per_employee: f64,
    pub payroll_efficiency: f64,
    pub utilisation_rate: f64,
    pub absenteeism_rate: f64,
    pub overtime_rate: f64,
    pub revenue_per_hour: f64,
    pub opportunity_gain: f64,
}

impl WorkforceProductivityFigures {
    pub fn compute(input: &WorkforceProductivityInput) -> Self {
        let employees = f64::from(input.total_employees);
        let total_target_hours = employees * input.target_hours_per_employee;
        let lost_hours = input.absenteeism_days * HOURS_PER_WORKDAY;
        let extra_hours = UTILISATION_BOOST * total_target_hours;
        let revenue_per_hour = ratio_or_zero(input.total_revenue, input.productive_hours);

        Self {
            total_target_hours,
            lost_hours,
            extra_hours,
            revenue_per_employee: ratio_or_zero(input.total_revenue, employees),
            payroll_efficiency: ratio_or_zero(input.total_revenue, input.payroll_cost) * 100.0,
            utilisation_rate: ratio_or_zero(input.productive_hours, total_target_hours) * 100.0,
            absenteeism_rate: ratio_or_zero(lost_hours, total_target_hours) * 100.0,
            overtime_rate: ratio_or_zero(input.overtime_hours, input.productive_hours) * 100.0,
            revenue_per_hour,
            opportunity_gain: extra_hours * revenue_per_hour,
        }
    }
}

impl ModuleInput for WorkforceProductivityInput {
    const KIND: CalculatorKind = CalculatorKind::WorkforceProductivity;

    fn industry(&self) -> &str {
        &self.industry
    }

    fn validate(&self) -> Result<()> {
        validate::industry(&self.industry)?;
        validate::positive("total_revenue", self.total_revenue)?;
        validate::positive("payroll_cost", self.payroll_cost)?;
        validate::positive_count("total_employees", u64::from(self.total_employees))?;
        validate::positive("productive_hours", self.productive_hours)?;
        validate::positive("target_hours_per_employee", self.target_hours_per_employee)?;
        validate::non_negative("overtime_hours", self.overtime_hours)?;
        validate::non_negative("absenteeism_days", self.absenteeism_days)
    }

    /// The industry row only has to exist; no benchmark constant feeds in.
    fn calculate(&self, _benchmarks: &BenchmarkRow) -> ModuleResult {
        let f = WorkforceProductivityFigures::compute(self);
        let cents = |key, label, value: f64| {
            let value = round_to(value, 2);
            Metric::new(key, label, value, format_currency_cents(value))
        };
        let percent = |key, label, value: f64| {
            Metric::new(key, label, round_to(value, 1), format_percent(value))
        };

        let metrics = vec![
            cents("revenue_per_employee", "Revenue per Employee", f.revenue_per_employee),
            percent("payroll_efficiency", "Payroll Efficiency", f.payroll_efficiency),
            percent("utilisation_rate", "Utilisation Rate", f.utilisation_rate),
            percent("absenteeism_rate", "Absenteeism Rate", f.absenteeism_rate),
            percent("overtime_rate", "Overtime Rate", f.overtime_rate),
            cents("opportunity_gain", "Opportunity Gain", f.opportunity_gain),
        ];
        let message = format!(
            "Target utilisation boost of 5% across {} employees.",
            self.total_employees
        );

        ModuleResult::new(Self::KIND, metrics).with_messages(vec![message])
    }
}
