//! Property-based tests for the calculators
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - Loss and cost figures are never negative
//! - Calculations are deterministic
//! - Aggregate totals equal the sum of their parts

mod common;

use clarity::benchmarks::BenchmarkRow;
use clarity::calculators::{
    run_module, CustomerChurnFigures, CustomerChurnInput, LeadershipDragFigures,
    LeadershipDragInput, PayrollWasteFigures, PayrollWasteInput, ProductivityDiveFigures,
    ProductivityDiveInput, WorkforceProductivityFigures, WorkforceProductivityInput,
};
use clarity::projection::project_profit_json;
use clarity::risk::{aggregate_operational_risk, RiskAggregateInput};
use proptest::prelude::*;
use serde_json::json;

fn open_percentage() -> impl Strategy<Value = f64> {
    0.5f64..99.5
}

proptest! {
    #[test]
    fn prop_payroll_losses_are_non_negative(
        employees in 1u32..5_000,
        salary in 1_000.0f64..500_000.0,
        improvement in open_percentage(),
    ) {
        let input = PayrollWasteInput {
            industry: "Retail".into(),
            total_employees: employees,
            avg_salary: salary,
            improvement_rate: improvement,
        };
        let f = PayrollWasteFigures::compute(&input, &common::retail_row());

        prop_assert!(f.inefficiency_loss >= 0.0);
        prop_assert!(f.churn_loss >= 0.0);
        prop_assert!(f.savings >= 0.0);
        prop_assert!(f.improved_cost <= f.inefficiency_loss);
        prop_assert!(f.payback_days >= 0.0);
    }

    #[test]
    fn prop_payroll_savings_track_improvement_bounds(
        employees in 1u32..5_000,
        salary in 1_000.0f64..500_000.0,
    ) {
        let figures = |improvement: f64| {
            let input = PayrollWasteInput {
                industry: "Retail".into(),
                total_employees: employees,
                avg_salary: salary,
                improvement_rate: improvement,
            };
            PayrollWasteFigures::compute(&input, &common::retail_row())
        };

        let none = figures(0.0);
        prop_assert_eq!(none.savings, 0.0);
        prop_assert_eq!(none.payback_days, 0.0);

        let full = figures(100.0);
        prop_assert!((full.savings - full.inefficiency_loss).abs() < 1e-6);
    }

    #[test]
    fn prop_churn_gain_never_exceeds_loss(
        customers in 1u64..1_000_000,
        churn in open_percentage(),
        revenue in 1.0f64..100_000.0,
        cac in 0.0f64..10_000.0,
        improvement in open_percentage(),
    ) {
        let input = CustomerChurnInput {
            industry: "Retail".into(),
            num_customers: customers,
            churn_rate: churn,
            avg_revenue: revenue,
            cac,
            desired_improvement: improvement,
        };
        let f = CustomerChurnFigures::compute(&input);

        prop_assert!(f.improved_rate < f.churn_rate);
        prop_assert!(f.potential_gain >= 0.0);
        prop_assert!(f.potential_gain <= f.revenue_loss * (1.0 + 1e-9));
        prop_assert!(f.replacement_cost >= 0.0);
    }

    #[test]
    fn prop_leadership_losses_are_non_negative(
        employees in 1u32..5_000,
        salary in 1_000.0f64..500_000.0,
        drag in open_percentage(),
        sparse in any::<bool>(),
    ) {
        let input = LeadershipDragInput {
            industry: "Retail".into(),
            total_employees: employees,
            avg_salary: salary,
            leadership_drag: drag,
        };
        let row = if sparse { BenchmarkRow::new("Retail") } else { common::retail_row() };
        let f = LeadershipDragFigures::compute(&input, &row);

        prop_assert!(f.monthly_loss >= 0.0);
        prop_assert!(f.annual_loss >= 0.0);
        prop_assert!(f.excess_monthly_cost >= 0.0);
        prop_assert!(f.excess_monthly_cost <= f.monthly_loss * (1.0 + 1e-9));
    }

    #[test]
    fn prop_workforce_figures_are_non_negative(
        employees in 1u32..5_000,
        revenue in 1.0f64..50_000_000.0,
        payroll in 1.0f64..20_000_000.0,
        productive in 1.0f64..1_000_000.0,
        target in 1.0f64..400.0,
        overtime in 0.0f64..10_000.0,
        absent in 0.0f64..1_000.0,
    ) {
        let input = WorkforceProductivityInput {
            industry: "Retail".into(),
            total_revenue: revenue,
            payroll_cost: payroll,
            total_employees: employees,
            productive_hours: productive,
            target_hours_per_employee: target,
            overtime_hours: overtime,
            absenteeism_days: absent,
        };
        let f = WorkforceProductivityFigures::compute(&input);

        prop_assert!(f.revenue_per_employee > 0.0);
        prop_assert!(f.opportunity_gain >= 0.0);
        prop_assert!(f.payroll_efficiency >= 0.0);
        prop_assert!(f.utilisation_rate >= 0.0);
        prop_assert!(f.absenteeism_rate >= 0.0);
        prop_assert!(f.overtime_rate >= 0.0);
    }

    #[test]
    fn prop_calculation_is_deterministic(
        employees in 1u32..1_000,
        salary in 1_000.0f64..300_000.0,
        drag in open_percentage(),
    ) {
        let input = LeadershipDragInput {
            industry: "Retail".into(),
            total_employees: employees,
            avg_salary: salary,
            leadership_drag: drag,
        };
        let repo = common::repository();
        let first = run_module(&input, &repo).unwrap();
        let second = run_module(&input, &repo).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_deep_dive_gap_is_a_fraction(
        employees in 1u32..1_000,
        salary in 1_000.0f64..300_000.0,
        hours in proptest::option::of(0.0f64..400.0),
        days in proptest::option::of(0.0f64..30.0),
    ) {
        let input = ProductivityDiveInput {
            industry: "Retail".into(),
            total_employees: employees,
            avg_salary: salary,
            absenteeism_days: days,
            avg_hours: hours,
        };
        let f = ProductivityDiveFigures::compute(&input, &common::retail_row());

        prop_assert!((0.0..=1.0).contains(&f.utilisation_gap));
        prop_assert!(f.absenteeism_cost >= 0.0);
        prop_assert!(f.hidden_cost() >= f.underutilisation_cost);
    }

    #[test]
    fn prop_risk_total_is_sum_of_breakdown(
        employees in 0u32..500,
        salary in 0.0f64..200_000.0,
        improvement in 0.0f64..100.0,
        drag in 0.0f64..100.0,
        revenue in 0.0f64..10_000_000.0,
    ) {
        let input = RiskAggregateInput {
            total_employees: employees,
            avg_salary: salary,
            improvement_rate: improvement,
            leadership_drag: drag,
            total_revenue: revenue,
            ..Default::default()
        };
        let result = aggregate_operational_risk(&input).unwrap();
        let sum: f64 = result.module_breakdown.values().sum();

        prop_assert!((result.total_risk_dollars - sum).abs() < 0.01);
        prop_assert!(result.ebitda_risk_pct >= 0.0);
        prop_assert!(result.module_breakdown.values().all(|v| *v >= 0.0));
    }

    #[test]
    fn prop_best_case_is_fixes_plus_risk(
        revenue in 0.0f64..10_000_000.0,
        cogs in 0.0f64..5_000_000.0,
        opex in 0.0f64..5_000_000.0,
        savings in 0.0f64..1_000_000.0,
        risk in 0.0f64..1_000_000.0,
    ) {
        let result = project_profit_json(json!({
            "inputs": {"revenue": revenue, "cogs": cogs, "opex": opex},
            "savings": {"payroll": savings},
            "ors": {"ebitdaAtRisk": risk}
        }))
        .unwrap();
        let r = result.results;

        let combined = r.fixes.delta_vs_now + r.ors.delta_vs_now;
        prop_assert!((r.best.delta_vs_now - combined).abs() < 1e-6);
        prop_assert!(r.best.net >= r.now.net);
    }
}
