use serde::{Deserialize, Serialize};

/// Named metric columns understood by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BenchmarkField {
    EmployeeChurnRate,
    ProcessInefficiencyRate,
    EmployeeReplacementCost,
    LeadershipDragImpact,
    TargetHoursPerEmployee,
    UtilisationRate,
    AbsenteeismDaysPerMonth,
    OvertimeDependency,
    OutputPerEmployee,
    CustomerChurnRate,
    CustomerAcquisitionCost,
}

impl BenchmarkField {
    pub const ALL: [BenchmarkField; 11] = [
        Self::EmployeeChurnRate,
        Self::ProcessInefficiencyRate,
        Self::EmployeeReplacementCost,
        Self::LeadershipDragImpact,
        Self::TargetHoursPerEmployee,
        Self::UtilisationRate,
        Self::AbsenteeismDaysPerMonth,
        Self::OvertimeDependency,
        Self::OutputPerEmployee,
        Self::CustomerChurnRate,
        Self::CustomerAcquisitionCost,
    ];

    /// Canonical column name.
    pub fn key(self) -> &'static str {
        match self {
            Self::EmployeeChurnRate => "Employee Churn Rate (%)",
            Self::ProcessInefficiencyRate => "Process Inefficiency Rate (%)",
            Self::EmployeeReplacementCost => "Employee Replacement Cost (AUD)",
            Self::LeadershipDragImpact => "Leadership Drag Impact (%)",
            Self::TargetHoursPerEmployee => "Target Hours per Employee",
            Self::UtilisationRate => "Utilisation Rate (%)",
            Self::AbsenteeismDaysPerMonth => "Absenteeism Days per Month",
            Self::OvertimeDependency => "Overtime Dependency (%)",
            Self::OutputPerEmployee => "Output per Employee (AUD/month)",
            Self::CustomerChurnRate => "Customer Churn Rate (%)",
            Self::CustomerAcquisitionCost => "Customer Acquisition Cost (AUD)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::CustomerAcquisitionCost => &["Customer Acquisition Cost (CAC) (AUD)"],
            _ => &[],
        }
    }

    /// Whether a CSV header names this field. Headers may carry a trailing
    /// `(Value)` qualifier.
    pub fn matches_column(self, column: &str) -> bool {
        let name = column.trim();
        let base = name
            .strip_suffix("(Value)")
            .map(str::trim_end)
            .unwrap_or(name);
        base == self.key() || self.aliases().contains(&base)
    }

    pub fn for_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.matches_column(column))
    }
}

/// Reference constants for one industry.
///
/// Every metric is optional; calculators declare their own fallback when a
/// value is absent rather than letting a missing cell reach the arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub industry: String,
    pub employee_churn_rate: Option<f64>,
    pub process_inefficiency_rate: Option<f64>,
    pub employee_replacement_cost: Option<f64>,
    pub leadership_drag_impact: Option<f64>,
    pub target_hours_per_employee: Option<f64>,
    pub utilisation_rate: Option<f64>,
    pub absenteeism_days_per_month: Option<f64>,
    pub overtime_dependency: Option<f64>,
    pub output_per_employee: Option<f64>,
    pub customer_churn_rate: Option<f64>,
    pub customer_acquisition_cost: Option<f64>,
}

impl BenchmarkRow {
    pub fn new(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            ..Self::default()
        }
    }

    /// Builder-style setter, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, field: BenchmarkField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn get(&self, field: BenchmarkField) -> Option<f64> {
        *self.slot(field)
    }

    /// Value or the caller's fallback.
    pub fn get_or(&self, field: BenchmarkField, fallback: f64) -> f64 {
        self.get(field).unwrap_or(fallback)
    }

    pub fn set(&mut self, field: BenchmarkField, value: Option<f64>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: BenchmarkField) -> &Option<f64> {
        match field {
            BenchmarkField::EmployeeChurnRate => &self.employee_churn_rate,
            BenchmarkField::ProcessInefficiencyRate => &self.process_inefficiency_rate,
            BenchmarkField::EmployeeReplacementCost => &self.employee_replacement_cost,
            BenchmarkField::LeadershipDragImpact => &self.leadership_drag_impact,
            BenchmarkField::TargetHoursPerEmployee => &self.target_hours_per_employee,
            BenchmarkField::UtilisationRate => &self.utilisation_rate,
            BenchmarkField::AbsenteeismDaysPerMonth => &self.absenteeism_days_per_month,
            BenchmarkField::OvertimeDependency => &self.overtime_dependency,
            BenchmarkField::OutputPerEmployee => &self.output_per_employee,
            BenchmarkField::CustomerChurnRate => &self.customer_churn_rate,
            BenchmarkField::CustomerAcquisitionCost => &self.customer_acquisition_cost,
        }
    }

    fn slot_mut(&mut self, field: BenchmarkField) -> &mut Option<f64> {
        match field {
            BenchmarkField::EmployeeChurnRate => &mut self.employee_churn_rate,
            BenchmarkField::ProcessInefficiencyRate => &mut self.process_inefficiency_rate,
            BenchmarkField::EmployeeReplacementCost => &mut self.employee_replacement_cost,
            BenchmarkField::LeadershipDragImpact => &mut self.leadership_drag_impact,
            BenchmarkField::TargetHoursPerEmployee => &mut self.target_hours_per_employee,
            BenchmarkField::UtilisationRate => &mut self.utilisation_rate,
            BenchmarkField::AbsenteeismDaysPerMonth => &mut self.absenteeism_days_per_month,
            BenchmarkField::OvertimeDependency => &mut self.overtime_dependency,
            BenchmarkField::OutputPerEmployee => &mut self.output_per_employee,
            BenchmarkField::CustomerChurnRate => &mut self.customer_churn_rate,
            BenchmarkField::CustomerAcquisitionCost => &mut self.customer_acquisition_cost,
        }
    }
}
