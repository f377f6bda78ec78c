use super::{validate, CalculatorKind, Metric, ModuleInput, ModuleResult};
use crate::benchmarks::{BenchmarkField, BenchmarkRow};
use crate::errors::Result;
use crate::formatting::{format_per_month, format_percent, format_plain, group_thousands, round_to, round_whole};
use crate::io::numeric::{count, number, optional_number};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TARGET_HOURS_FALLBACK: f64 = 160.0;
pub const UTILISATION_FALLBACK: f64 = 75.0;
pub const ABSENTEEISM_FALLBACK: f64 = 4.0;
pub const OVERTIME_FALLBACK: f64 = 10.0;
pub const OUTPUT_PER_EMPLOYEE_FALLBACK: f64 = 12_000.0;
/// Divisor turning annual salary into a daily rate.
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;

/// `None` means "use the industry benchmark"; an explicit zero is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityDiveInput {
    pub industry: String,
    #[serde(deserialize_with = "count")]
    pub total_employees: u32,
    #[serde(deserialize_with = "number")]
    pub avg_salary: f64,
    #[serde(default, deserialize_with = "optional_number")]
    pub absenteeism_days: Option<f64>,
    #[serde(default, deserialize_with = "optional_number")]
    pub avg_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductivityDiveFigures {
    pub target_hours: f64,
    pub utilisation_benchmark: f64,
    pub absenteeism_benchmark: f64,
    pub overtime_benchmark: f64,
    pub output_per_employee: f64,
    pub absenteeism_days: f64,
    pub avg_hours: f64,
    pub utilisation_gap: f64,
    pub underutilisation_cost: f64,
    pub avg_daily_salary: f64,
    pub absenteeism_cost: f64,
}

impl ProductivityDiveFigures {
    pub fn compute(input: &ProductivityDiveInput, row: &BenchmarkRow) -> Self {
        let target_hours = row.get_or(BenchmarkField::TargetHoursPerEmployee, TARGET_HOURS_FALLBACK);
        let utilisation_benchmark = row.get_or(BenchmarkField::UtilisationRate, UTILISATION_FALLBACK);
        let absenteeism_benchmark =
            row.get_or(BenchmarkField::AbsenteeismDaysPerMonth, ABSENTEEISM_FALLBACK);
        let overtime_benchmark = row.get_or(BenchmarkField::OvertimeDependency, OVERTIME_FALLBACK);
        let output_per_employee =
            row.get_or(BenchmarkField::OutputPerEmployee, OUTPUT_PER_EMPLOYEE_FALLBACK);

        let absenteeism_days = input.absenteeism_days.unwrap_or(absenteeism_benchmark);
        let avg_hours = input.avg_hours.unwrap_or(target_hours);

        // A zero target has no meaningful gap.
        let utilisation_gap = if target_hours > 0.0 {
            ((target_hours - avg_hours) / target_hours).max(0.0)
        } else {
            0.0
        };
        let underutilisation_cost =
            utilisation_gap * output_per_employee * f64::from(input.total_employees);
        let avg_daily_salary = input.avg_salary / WORKING_DAYS_PER_YEAR;

        Self {
            target_hours,
            utilisation_benchmark,
            absenteeism_benchmark,
            overtime_benchmark,
            output_per_employee,
            absenteeism_days,
            avg_hours,
            utilisation_gap,
            underutilisation_cost,
            avg_daily_salary,
            absenteeism_cost: absenteeism_days * avg_daily_salary,
        }
    }

    /// Combined monthly cost of the two gaps.
    pub fn hidden_cost(&self) -> f64 {
        self.absenteeism_cost + self.underutilisation_cost
    }
}

impl ModuleInput for ProductivityDiveInput {
    const KIND: CalculatorKind = CalculatorKind::ProductivityDive;

    fn industry(&self) -> &str {
        &self.industry
    }

    fn validate(&self) -> Result<()> {
        validate::industry(&self.industry)?;
        validate::positive_count("total_employees", u64::from(self.total_employees))?;
        validate::positive("avg_salary", self.avg_salary)?;
        if let Some(days) = self.absenteeism_days {
            validate::non_negative("absenteeism_days", days)?;
        }
        if let Some(hours) = self.avg_hours {
            validate::non_negative("avg_hours", hours)?;
        }
        Ok(())
    }

    fn calculate(&self, benchmarks: &BenchmarkRow) -> ModuleResult {
        let f = ProductivityDiveFigures::compute(self, benchmarks);
        debug!(
            absenteeism_days = f.absenteeism_days,
            avg_hours = f.avg_hours,
            "resolved deep-dive inputs"
        );
        let monthly = |key, label, value: f64| {
            let value = round_whole(value);
            Metric::new(key, label, value, format_per_month(value))
        };

        let metrics = vec![
            monthly("absenteeism_cost", "Absenteeism Cost", f.absenteeism_cost),
            Metric::new(
                "utilisation_gap",
                "Utilisation Gap",
                round_to(f.utilisation_gap * 100.0, 1),
                format_percent(f.utilisation_gap * 100.0),
            ),
            monthly(
                "underutilisation_cost",
                "Output Loss from Under-utilisation",
                f.underutilisation_cost,
            ),
            monthly("output_per_employee", "Output per Employee", f.output_per_employee),
        ];
        let messages = vec![
            format!("Target Hours: {} hrs/month", format_plain(f.target_hours)),
            format!("Utilisation Benchmark: {}%", format_plain(f.utilisation_benchmark)),
            format!(
                "Absenteeism Benchmark: {} days/month",
                format_plain(f.absenteeism_benchmark)
            ),
            format!(
                "Overtime Dependency Benchmark: {}%",
                format_plain(f.overtime_benchmark)
            ),
        ];
        let straight_talk = format!(
            "These hidden gaps are costing up to AUD ${} per month in missed productivity.",
            group_thousands(f.hidden_cost(), 0)
        );

        ModuleResult::new(Self::KIND, metrics)
            .with_messages(messages)
            .with_straight_talk(straight_talk)
    }
}
