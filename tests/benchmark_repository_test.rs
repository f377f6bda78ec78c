mod common;

use clarity::benchmarks::{
    records_from_json, BenchmarkField, BenchmarkRepository, BenchmarkTable,
    CsvBenchmarkRepository, IndustryDefaults,
};
use clarity::ClarityError;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn lookup_reads_value_suffixed_headers() {
    let temp = TempDir::new().unwrap();
    let repo = CsvBenchmarkRepository::new(common::write_sample_csv(temp.path()));

    let row = repo.lookup("Retail").unwrap();
    assert_eq!(row.get(BenchmarkField::EmployeeChurnRate), Some(15.0));
    assert_eq!(row.get(BenchmarkField::CustomerAcquisitionCost), Some(650.0));
    assert_eq!(row, common::retail_row());

    assert_eq!(
        repo.all_industries().unwrap(),
        vec!["Retail".to_string(), "Technology".to_string()]
    );
    assert!(matches!(
        repo.lookup("retail"),
        Err(ClarityError::NotFound { .. })
    ));
}

#[test]
fn edit_then_reread_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = common::write_sample_csv(temp.path());
    let repo = CsvBenchmarkRepository::new(&path);
    let original_header = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();

    let mut records = repo.table().unwrap().records();
    records[0].insert("Employee Churn Rate (%) (Value)".into(), "17.5".into());
    records[0].insert("Not A Column".into(), "dropped".into());
    repo.update(&records).unwrap();

    let row = repo.lookup("Retail").unwrap();
    assert_eq!(row.get(BenchmarkField::EmployeeChurnRate), Some(17.5));
    let pristine = BenchmarkTable::from_reader(common::SAMPLE_CSV.as_bytes()).unwrap();
    assert_eq!(
        repo.lookup("Technology").unwrap(),
        pristine.row("Technology").unwrap()
    );

    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten.lines().next().unwrap(), original_header);
    assert!(rewritten.contains("High"));
    assert!(!rewritten.contains("dropped"));
}

#[test]
fn update_from_json_records() {
    let temp = TempDir::new().unwrap();
    let path = common::write_sample_csv(temp.path());
    let repo = CsvBenchmarkRepository::new(&path);

    let mut exported = serde_json::to_value(repo.table().unwrap().records()).unwrap();
    exported[1]["Leadership Drag Impact (%) (Value)"] = json!(12);
    let records = records_from_json(exported).unwrap();
    repo.update(&records).unwrap();

    let row = repo.lookup("Technology").unwrap();
    assert_eq!(row.get(BenchmarkField::LeadershipDragImpact), Some(12.0));
}

#[test]
fn update_missing_column_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = common::write_sample_csv(temp.path());
    let repo = CsvBenchmarkRepository::new(&path);

    let mut records = repo.table().unwrap().records();
    records[0].remove("Utilisation Rate (%) (Value)");
    let err = repo.update(&records).unwrap_err();

    assert!(matches!(err, ClarityError::Validation { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), common::SAMPLE_CSV);
}

#[test]
fn non_numeric_cell_is_internal_error() {
    let table = BenchmarkTable::from_reader(
        "Industry,Utilisation Rate (%)\nRetail,high\n".as_bytes(),
    )
    .unwrap();
    assert!(matches!(table.row("Retail"), Err(ClarityError::Internal { .. })));
}

#[test]
fn empty_cells_are_absent_and_defaults_fall_back() {
    let table = BenchmarkTable::from_reader(
        "Industry,Customer Churn Rate (%),Target Hours per Employee\nMining,,152.9\n".as_bytes(),
    )
    .unwrap();
    let row = table.row("Mining").unwrap();
    assert_eq!(row.get(BenchmarkField::CustomerChurnRate), None);

    let defaults = IndustryDefaults::from_row(&row);
    assert_eq!(defaults.churn_rate, 0);
    assert_eq!(defaults.target_hours_per_employee, 152);
    assert_eq!(defaults.leadership_drag, 10);
    assert_eq!(defaults.cac, 800);
    assert_eq!(defaults.absenteeism_days, 1.0);
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let repo = CsvBenchmarkRepository::new(temp.path().join("absent.csv"));
    let err = repo.all_industries().unwrap_err();
    assert!(matches!(err, ClarityError::Io { .. }));
    assert!(err.is_user_fixable());
}
