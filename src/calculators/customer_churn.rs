use super::{benchmark_text, validate, CalculatorKind, Metric, ModuleInput, ModuleResult};
use crate::benchmarks::BenchmarkRow;
use crate::errors::Result;
use crate::formatting::{format_currency, round_whole};
use crate::io::numeric::{count, number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerChurnInput {
    pub industry: String,
    #[serde(deserialize_with = "count")]
    pub num_customers: u64,
    /// Current annual churn, in percent.
    #[serde(deserialize_with = "number")]
    pub churn_rate: f64,
    #[serde(deserialize_with = "number")]
    pub avg_revenue: f64,
    #[serde(deserialize_with = "number")]
    pub cac: f64,
    #[serde(deserialize_with = "number")]
    pub desired_improvement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CustomerChurnFigures {
    pub churn_rate: f64,
    pub improved_rate: f64,
    pub revenue_loss: f64,
    pub replacement_cost: f64,
    pub potential_gain: f64,
}

impl CustomerChurnFigures {
    pub fn compute(input: &CustomerChurnInput) -> Self {
        let customers = input.num_customers as f64;
        let churn_rate = input.churn_rate / 100.0;
        let improved_rate = churn_rate * (1.0 - input.desired_improvement / 100.0);
        Self {
            churn_rate,
            improved_rate,
            revenue_loss: customers * churn_rate * input.avg_revenue,
            replacement_cost: customers * churn_rate * input.cac,
            potential_gain: customers * (churn_rate - improved_rate) * input.avg_revenue,
        }
    }
}

impl ModuleInput for CustomerChurnInput {
    const KIND: CalculatorKind = CalculatorKind::CustomerChurn;

    fn industry(&self) -> &str {
        &self.industry
    }

    fn validate(&self) -> Result<()> {
        validate::industry(&self.industry)?;
        validate::positive_count("num_customers", self.num_customers)?;
        validate::open_percentage("churn_rate", self.churn_rate)?;
        validate::positive("avg_revenue", self.avg_revenue)?;
        validate::non_negative("cac", self.cac)?;
        validate::open_percentage("desired_improvement", self.desired_improvement)
    }

    fn calculate(&self, benchmarks: &BenchmarkRow) -> ModuleResult {
        let f = CustomerChurnFigures::compute(self);
        let money = |key, label, value: f64| {
            let value = round_whole(value);
            Metric::new(key, label, value, format_currency(value))
        };

        let metrics = vec![
            money("revenue_loss", "Revenue Loss", f.revenue_loss),
            money("replacement_cost", "Replacement Cost", f.replacement_cost),
            money("potential_gain", "Potential Gain", f.potential_gain),
        ];
        let message = format!(
            "Your churn rate compared to {} industry benchmark ({}%).",
            benchmarks.industry,
            benchmark_text(benchmarks.customer_churn_rate)
        );

        ModuleResult::new(Self::KIND, metrics).with_messages(vec![message])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::BenchmarkField;

    fn input() -> CustomerChurnInput {
        CustomerChurnInput {
            industry: "Retail".into(),
            num_customers: 1000,
            churn_rate: 10.0,
            avg_revenue: 500.0,
            cac: 100.0,
            desired_improvement: 20.0,
        }
    }

    #[test]
    fn computes_rounded_amounts() {
        let row = BenchmarkRow::new("Retail").with(BenchmarkField::CustomerChurnRate, 12.0);
        let result = input().calculate(&row);
        assert_eq!(result.value("revenue_loss"), Some(50_000.0));
        assert_eq!(result.value("replacement_cost"), Some(10_000.0));
        assert_eq!(result.value("potential_gain"), Some(10_000.0));
        assert_eq!(result.display("potential_gain"), Some("AUD $10,000"));
        assert_eq!(
            result.benchmark_messages,
            vec!["Your churn rate compared to Retail industry benchmark (12%)."]
        );
    }

    #[test]
    fn improved_rate_is_relative() {
        let f = CustomerChurnFigures::compute(&input());
        assert!((f.improved_rate - 0.08).abs() < 1e-12);
    }

    #[test]
    fn zero_cac_is_allowed() {
        let free = CustomerChurnInput { cac: 0.0, ..input() };
        assert!(free.validate().is_ok());
        assert_eq!(CustomerChurnFigures::compute(&free).replacement_cost, 0.0);
    }

    #[test]
    fn rejects_zero_customers() {
        let none = CustomerChurnInput {
            num_customers: 0,
            ..input()
        };
        assert!(none.validate().is_err());
    }
}
