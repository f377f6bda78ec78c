use super::row::{BenchmarkField, BenchmarkRow};
use serde::Serialize;

const CHURN_RATE_FALLBACK: f64 = 0.0;
const INEFFICIENCY_RATE_FALLBACK: f64 = 0.0;
const LEADERSHIP_DRAG_FALLBACK: f64 = 10.0;
const TARGET_HOURS_FALLBACK: f64 = 160.0;
const ABSENTEEISM_DAYS_FALLBACK: f64 = 1.0;
const CAC_FALLBACK: f64 = 800.0;

/// Suggested starting values for calculator forms, drawn from an industry row.
///
/// Whole-number fields truncate toward zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryDefaults {
    pub churn_rate: i64,
    pub inefficiency_rate: i64,
    pub leadership_drag: i64,
    pub target_hours_per_employee: i64,
    pub absenteeism_days: f64,
    pub cac: i64,
}

impl IndustryDefaults {
    pub fn from_row(row: &BenchmarkRow) -> Self {
        let whole = |field: BenchmarkField, fallback: f64| row.get_or(field, fallback).trunc() as i64;
        Self {
            churn_rate: whole(BenchmarkField::CustomerChurnRate, CHURN_RATE_FALLBACK),
            inefficiency_rate: whole(
                BenchmarkField::ProcessInefficiencyRate,
                INEFFICIENCY_RATE_FALLBACK,
            ),
            leadership_drag: whole(BenchmarkField::LeadershipDragImpact, LEADERSHIP_DRAG_FALLBACK),
            target_hours_per_employee: whole(
                BenchmarkField::TargetHoursPerEmployee,
                TARGET_HOURS_FALLBACK,
            ),
            absenteeism_days: row.get_or(
                BenchmarkField::AbsenteeismDaysPerMonth,
                ABSENTEEISM_DAYS_FALLBACK,
            ),
            cac: whole(BenchmarkField::CustomerAcquisitionCost, CAC_FALLBACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_uses_fallbacks() {
        let defaults = IndustryDefaults::from_row(&BenchmarkRow::new("Unknown"));
        assert_eq!(
            defaults,
            IndustryDefaults {
                churn_rate: 0,
                inefficiency_rate: 0,
                leadership_drag: 10,
                target_hours_per_employee: 160,
                absenteeism_days: 1.0,
                cac: 800,
            }
        );
    }

    #[test]
    fn whole_fields_truncate() {
        let row = BenchmarkRow::new("Retail")
            .with(BenchmarkField::CustomerChurnRate, 12.9)
            .with(BenchmarkField::AbsenteeismDaysPerMonth, 1.4);
        let defaults = IndustryDefaults::from_row(&row);
        assert_eq!(defaults.churn_rate, 12);
        assert_eq!(defaults.absenteeism_days, 1.4);
    }
}
