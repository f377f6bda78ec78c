// Shared fixtures for clarity integration tests
#![allow(dead_code)]

use clarity::benchmarks::{BenchmarkField, BenchmarkRow, InMemoryBenchmarkRepository};
use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};

/// Two industries in the original `(Value)` header style, with a certainty
/// column that must survive edits untouched.
pub const SAMPLE_CSV: &str = indoc! {"
    Industry,Employee Churn Rate (%) (Value),Employee Churn Rate (%) (Certainty),Process Inefficiency Rate (%) (Value),Employee Replacement Cost (AUD) (Value),Leadership Drag Impact (%) (Value),Target Hours per Employee (Value),Utilisation Rate (%) (Value),Absenteeism Days per Month (Value),Overtime Dependency (%) (Value),Output per Employee (AUD/month) (Value),Customer Churn Rate (%) (Value),Customer Acquisition Cost (CAC) (AUD) (Value)
    Retail,15,High,20,25000,10,160,75,1.3,10,9800,12,650
    Technology,13,Medium,11,72000,8,160,74,0.8,8,18200,10,1400
"};

pub fn retail_row() -> BenchmarkRow {
    BenchmarkRow::new("Retail")
        .with(BenchmarkField::EmployeeChurnRate, 15.0)
        .with(BenchmarkField::ProcessInefficiencyRate, 20.0)
        .with(BenchmarkField::EmployeeReplacementCost, 25_000.0)
        .with(BenchmarkField::LeadershipDragImpact, 10.0)
        .with(BenchmarkField::TargetHoursPerEmployee, 160.0)
        .with(BenchmarkField::UtilisationRate, 75.0)
        .with(BenchmarkField::AbsenteeismDaysPerMonth, 1.3)
        .with(BenchmarkField::OvertimeDependency, 10.0)
        .with(BenchmarkField::OutputPerEmployee, 9_800.0)
        .with(BenchmarkField::CustomerChurnRate, 12.0)
        .with(BenchmarkField::CustomerAcquisitionCost, 650.0)
}

/// A row with no metric cells at all, so every fallback constant applies.
pub fn sparse_row(industry: &str) -> BenchmarkRow {
    BenchmarkRow::new(industry)
}

pub fn repository() -> InMemoryBenchmarkRepository {
    InMemoryBenchmarkRepository::new([retail_row(), sparse_row("Mining")])
}

pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("industry_benchmarks.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
