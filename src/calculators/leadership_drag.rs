use super::{validate, CalculatorKind, Metric, ModuleInput, ModuleResult};
use crate::benchmarks::{BenchmarkField, BenchmarkRow};
use crate::errors::Result;
use crate::formatting::{format_currency, format_plain, round_whole};
use crate::io::numeric::{count, number};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Industry drag assumed when the row has no value.
pub const INDUSTRY_DRAG_FALLBACK: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadershipDragInput {
    pub industry: String,
    #[serde(deserialize_with = "count")]
    pub total_employees: u32,
    #[serde(deserialize_with = "number")]
    pub avg_salary: f64,
    /// Share of payroll lost to leadership friction, in percent.
    #[serde(deserialize_with = "number")]
    pub leadership_drag: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadershipDragFigures {
    pub drag_rate: f64,
    pub monthly_loss: f64,
    pub annual_loss: f64,
    pub industry_average: f64,
    pub excess_drag: f64,
    pub excess_monthly_cost: f64,
}

impl LeadershipDragFigures {
    pub fn compute(input: &LeadershipDragInput, row: &BenchmarkRow) -> Self {
        let employees = f64::from(input.total_employees);
        let drag_rate = input.leadership_drag / 100.0;
        let annual_loss = input.avg_salary * drag_rate * employees;
        let industry_average = row.get_or(BenchmarkField::LeadershipDragImpact, INDUSTRY_DRAG_FALLBACK);
        let excess_drag = (input.leadership_drag - industry_average).max(0.0) / 100.0;

        Self {
            drag_rate,
            monthly_loss: annual_loss / 12.0,
            annual_loss,
            industry_average,
            excess_drag,
            excess_monthly_cost: input.avg_salary * employees * excess_drag / 12.0,
        }
    }
}

impl ModuleInput for LeadershipDragInput {
    const KIND: CalculatorKind = CalculatorKind::LeadershipDrag;

    fn industry(&self) -> &str {
        &self.industry
    }

    fn validate(&self) -> Result<()> {
        validate::industry(&self.industry)?;
        validate::positive_count("total_employees", u64::from(self.total_employees))?;
        validate::positive("avg_salary", self.avg_salary)?;
        validate::open_percentage("leadership_drag", self.leadership_drag)
    }

    fn calculate(&self, benchmarks: &BenchmarkRow) -> ModuleResult {
        let f = LeadershipDragFigures::compute(self, benchmarks);
        debug!(industry_average = f.industry_average, "resolved leadership drag baseline");
        let money = |key, label, value: f64| {
            let value = round_whole(value);
            Metric::new(key, label, value, format_currency(value))
        };

        let metrics = vec![
            money("monthly_loss", "Monthly Leadership Drag Loss", f.monthly_loss),
            money("annual_loss", "Annual Leadership Drag Loss", f.annual_loss),
            money("excess_monthly_cost", "Excess Drag Monthly Cost", f.excess_monthly_cost),
        ];
        let message = format!(
            "Your leadership drag factor of {}% compared to {} industry average of {}%",
            format_plain(self.leadership_drag),
            benchmarks.industry,
            format_plain(f.industry_average)
        );

        ModuleResult::new(Self::KIND, metrics).with_messages(vec![message])
    }
}
