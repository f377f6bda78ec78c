use super::{benchmark_text, validate, CalculatorKind, Metric, ModuleInput, ModuleResult};
use crate::benchmarks::{BenchmarkField, BenchmarkRow};
use crate::errors::Result;
use crate::formatting::{format_currency, format_percent, format_plain, round_to, round_whole};
use crate::io::numeric::{count, number};
use serde::{Deserialize, Serialize};

/// Replacement cost assumed when the industry row has none.
pub const REPLACEMENT_COST_FALLBACK: f64 = 50_000.0;
/// Monthly programme cost per employee.
pub const INTERVENTION_COST_PER_EMPLOYEE: f64 = 7.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollWasteInput {
    pub industry: String,
    #[serde(deserialize_with = "count")]
    pub total_employees: u32,
    #[serde(deserialize_with = "number")]
    pub avg_salary: f64,
    /// Targeted reduction of the inefficiency loss, in percent.
    #[serde(deserialize_with = "number")]
    pub improvement_rate: f64,
}

/// Unrounded intermediate figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayrollWasteFigures {
    pub monthly_salary: f64,
    pub turnover_rate: f64,
    pub inefficiency_rate: f64,
    pub replacement_cost: f64,
    pub intervention_cost: f64,
    pub inefficiency_loss: f64,
    pub improved_cost: f64,
    pub savings: f64,
    pub churn_loss: f64,
    pub total_loss: f64,
    pub return_per_dollar: f64,
    pub payback_days: f64,
    pub monthly_roi: f64,
}

impl PayrollWasteFigures {
    pub fn compute(input: &PayrollWasteInput, row: &BenchmarkRow) -> Self {
        let employees = f64::from(input.total_employees);
        let monthly_salary = input.avg_salary / 12.0;
        let turnover_rate = row.get_or(BenchmarkField::EmployeeChurnRate, 0.0) / 100.0;
        let inefficiency_rate = row.get_or(BenchmarkField::ProcessInefficiencyRate, 0.0) / 100.0;
        let replacement_cost =
            row.get_or(BenchmarkField::EmployeeReplacementCost, REPLACEMENT_COST_FALLBACK);

        let intervention_cost = employees * INTERVENTION_COST_PER_EMPLOYEE;
        let inefficiency_loss = employees * monthly_salary * inefficiency_rate;
        let improved_cost = inefficiency_loss * (1.0 - input.improvement_rate / 100.0);
        let savings = inefficiency_loss - improved_cost;
        let churn_loss = employees * turnover_rate * replacement_cost / 12.0;
        let total_loss = inefficiency_loss + churn_loss;

        let return_per_dollar = super::ratio_or_zero(savings, intervention_cost);
        // A zero saving has no payback; negative savings flow through as-is.
        let payback_days = if savings != 0.0 {
            round_whole(intervention_cost / savings * 30.0)
        } else {
            0.0
        };

        Self {
            monthly_salary,
            turnover_rate,
            inefficiency_rate,
            replacement_cost,
            intervention_cost,
            inefficiency_loss,
            improved_cost,
            savings,
            churn_loss,
            total_loss,
            return_per_dollar,
            payback_days,
            monthly_roi: return_per_dollar * 100.0,
        }
    }
}

impl ModuleInput for PayrollWasteInput {
    const KIND: CalculatorKind = CalculatorKind::PayrollWaste;

    fn industry(&self) -> &str {
        &self.industry
    }

    fn validate(&self) -> Result<()> {
        validate::industry(&self.industry)?;
        validate::positive_count("total_employees", u64::from(self.total_employees))?;
        validate::positive("avg_salary", self.avg_salary)?;
        validate::open_percentage("improvement_rate", self.improvement_rate)
    }

    fn calculate(&self, benchmarks: &BenchmarkRow) -> ModuleResult {
        let f = PayrollWasteFigures::compute(self, benchmarks);
        let money = |key, label, value: f64| {
            let value = round_whole(value);
            Metric::new(key, label, value, format_currency(value))
        };
        let rpd = round_to(f.return_per_dollar, 2);

        let metrics = vec![
            money("churn_loss", "Employee Churn Cost", f.churn_loss),
            money("inefficiency_loss", "Payroll Inefficiency Cost", f.inefficiency_loss),
            money("total_loss", "Total Monthly Loss", f.total_loss),
            money("improved_cost", "Improved Inefficiency Cost", f.improved_cost),
            money("savings", "Direct Savings from Initiative", f.savings),
            Metric::new(
                "monthly_roi",
                "Monthly ROI",
                round_to(f.monthly_roi, 1),
                format_percent(f.monthly_roi),
            ),
            Metric::new("return_per_dollar", "Return Per Dollar", rpd, format!("${:.2}", rpd)),
            Metric::new(
                "payback_days",
                "Payback Period",
                f.payback_days,
                format!("{} days", format_plain(f.payback_days)),
            ),
        ];

        let messages = vec![
            format!(
                "{} typically has an employee churn rate of {}%.",
                benchmarks.industry,
                benchmark_text(benchmarks.employee_churn_rate)
            ),
            format!(
                "Inefficiency rate in {} averages {}%.",
                benchmarks.industry,
                benchmark_text(benchmarks.process_inefficiency_rate)
            ),
            format!(
                "You're targeting a {}% improvement.",
                format_plain(self.improvement_rate)
            ),
        ];

        ModuleResult::new(Self::KIND, metrics).with_messages(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::InMemoryBenchmarkRepository;
    use crate::calculators::run_module;
    use crate::errors::ClarityError;

    fn retail() -> BenchmarkRow {
        BenchmarkRow::new("Retail")
            .with(BenchmarkField::EmployeeChurnRate, 15.0)
            .with(BenchmarkField::ProcessInefficiencyRate, 20.0)
            .with(BenchmarkField::EmployeeReplacementCost, 30_000.0)
    }

    fn input() -> PayrollWasteInput {
        PayrollWasteInput {
            industry: "Retail".into(),
            total_employees: 10,
            avg_salary: 60_000.0,
            improvement_rate: 25.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn computes_retail_figures() {
        let f = PayrollWasteFigures::compute(&input(), &retail());
        assert!(close(f.inefficiency_loss, 10_000.0));
        assert!(close(f.improved_cost, 7_500.0));
        assert!(close(f.savings, 2_500.0));
        assert!(close(f.intervention_cost, 75.0));
        assert!(close(f.return_per_dollar, 2_500.0 / 75.0));
        assert_eq!(f.payback_days, 1.0);
        assert!(close(f.churn_loss, 3_750.0));
        assert!(close(f.total_loss, 13_750.0));
    }

    #[test]
    fn formats_metrics_and_messages() {
        let result = input().calculate(&retail());
        assert_eq!(result.display("inefficiency_loss"), Some("AUD $10,000"));
        assert_eq!(result.display("savings"), Some("AUD $2,500"));
        assert_eq!(result.display("return_per_dollar"), Some("$33.33"));
        assert_eq!(result.display("monthly_roi"), Some("3333.3%"));
        assert_eq!(result.display("payback_days"), Some("1 days"));
        assert_eq!(
            result.benchmark_messages[0],
            "Retail typically has an employee churn rate of 15%."
        );
        assert_eq!(
            result.benchmark_messages[2],
            "You're targeting a 25% improvement."
        );
    }

    #[test]
    fn missing_benchmarks_fall_back() {
        let f = PayrollWasteFigures::compute(&input(), &BenchmarkRow::new("Retail"));
        assert_eq!(f.replacement_cost, REPLACEMENT_COST_FALLBACK);
        assert_eq!(f.savings, 0.0);
        assert_eq!(f.payback_days, 0.0);

        let result = input().calculate(&BenchmarkRow::new("Retail"));
        assert_eq!(
            result.benchmark_messages[1],
            "Inefficiency rate in Retail averages N/A%."
        );
    }

    #[test]
    fn rejects_out_of_range_improvement() {
        let repo = InMemoryBenchmarkRepository::new([retail()]);
        for rate in [0.0, 100.0, -5.0] {
            let bad = PayrollWasteInput {
                improvement_rate: rate,
                ..input()
            };
            let err = run_module(&bad, &repo).unwrap_err();
            assert!(matches!(err, ClarityError::Validation { .. }), "{rate}");
        }
    }

    #[test]
    fn unknown_industry_is_not_found() {
        let repo = InMemoryBenchmarkRepository::new([retail()]);
        let bad = PayrollWasteInput {
            industry: "Mining".into(),
            ..input()
        };
        assert!(matches!(
            run_module(&bad, &repo),
            Err(ClarityError::NotFound { .. })
        ));
    }
}
