use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The eight input fields of an ROI scenario. Serialized names are the
/// stable contract vocabulary shared with scenario files and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    WageEurPerHour,
    HoursSavedPerUnit,
    UnitsPerMonth,
    BaselineErrorsPerMonth,
    ErrorReductionPct,
    CostPerErrorEur,
    OneTimeCostEur,
    MonthlyRecurringCostEur,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::WageEurPerHour,
        Field::HoursSavedPerUnit,
        Field::UnitsPerMonth,
        Field::BaselineErrorsPerMonth,
        Field::ErrorReductionPct,
        Field::CostPerErrorEur,
        Field::OneTimeCostEur,
        Field::MonthlyRecurringCostEur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::WageEurPerHour => "wageEurPerHour",
            Field::HoursSavedPerUnit => "hoursSavedPerUnit",
            Field::UnitsPerMonth => "unitsPerMonth",
            Field::BaselineErrorsPerMonth => "baselineErrorsPerMonth",
            Field::ErrorReductionPct => "errorReductionPct",
            Field::CostPerErrorEur => "costPerErrorEur",
            Field::OneTimeCostEur => "oneTimeCostEur",
            Field::MonthlyRecurringCostEur => "monthlyRecurringCostEur",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate input record as it arrives from the outside world: any field
/// may be absent, null, a number, a numeric string, or junk. Only the
/// validator turns this into an [`InputRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialInputRecord {
    pub wage_eur_per_hour: Option<Value>,
    pub hours_saved_per_unit: Option<Value>,
    pub units_per_month: Option<Value>,
    pub baseline_errors_per_month: Option<Value>,
    pub error_reduction_pct: Option<Value>,
    pub cost_per_error_eur: Option<Value>,
    pub one_time_cost_eur: Option<Value>,
    pub monthly_recurring_cost_eur: Option<Value>,
}

impl PartialInputRecord {
    pub fn get(&self, field: Field) -> Option<&Value> {
        match field {
            Field::WageEurPerHour => self.wage_eur_per_hour.as_ref(),
            Field::HoursSavedPerUnit => self.hours_saved_per_unit.as_ref(),
            Field::UnitsPerMonth => self.units_per_month.as_ref(),
            Field::BaselineErrorsPerMonth => self.baseline_errors_per_month.as_ref(),
            Field::ErrorReductionPct => self.error_reduction_pct.as_ref(),
            Field::CostPerErrorEur => self.cost_per_error_eur.as_ref(),
            Field::OneTimeCostEur => self.one_time_cost_eur.as_ref(),
            Field::MonthlyRecurringCostEur => self.monthly_recurring_cost_eur.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Value) {
        let slot = match field {
            Field::WageEurPerHour => &mut self.wage_eur_per_hour,
            Field::HoursSavedPerUnit => &mut self.hours_saved_per_unit,
            Field::UnitsPerMonth => &mut self.units_per_month,
            Field::BaselineErrorsPerMonth => &mut self.baseline_errors_per_month,
            Field::ErrorReductionPct => &mut self.error_reduction_pct,
            Field::CostPerErrorEur => &mut self.cost_per_error_eur,
            Field::OneTimeCostEur => &mut self.one_time_cost_eur,
            Field::MonthlyRecurringCostEur => &mut self.monthly_recurring_cost_eur,
        };
        *slot = Some(value);
    }
}

/// A fully validated input record. Fields are finite per the validator; the
/// calculator still clamps defensively before computing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    pub wage_eur_per_hour: f64,
    pub hours_saved_per_unit: f64,
    pub units_per_month: f64,
    pub baseline_errors_per_month: f64,
    pub error_reduction_pct: f64,
    pub cost_per_error_eur: f64,
    pub one_time_cost_eur: f64,
    pub monthly_recurring_cost_eur: f64,
}

impl InputRecord {
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("wageEurPerHour", self.wage_eur_per_hour),
            ("hoursSavedPerUnit", self.hours_saved_per_unit),
            ("unitsPerMonth", self.units_per_month),
            ("baselineErrorsPerMonth", self.baseline_errors_per_month),
            ("errorReductionPct", self.error_reduction_pct),
            ("costPerErrorEur", self.cost_per_error_eur),
            ("oneTimeCostEur", self.one_time_cost_eur),
            ("monthlyRecurringCostEur", self.monthly_recurring_cost_eur),
        ]
    }
}

/// The derived metrics. `roi` and `payback_months` may be positive infinity;
/// that is a defined output (no cost, or no payback), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub labor_savings_monthly: f64,
    pub error_savings_monthly: f64,
    pub gross_benefit_monthly: f64,
    pub net_benefit_monthly: f64,
    pub annual_gross_benefit: f64,
    pub annual_total_cost: f64,
    pub annual_net_benefit: f64,
    pub roi: f64,
    pub payback_months: f64,
    pub annualized_benefit_eur: f64,
}

impl OutputRecord {
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("laborSavingsMonthly", self.labor_savings_monthly),
            ("errorSavingsMonthly", self.error_savings_monthly),
            ("grossBenefitMonthly", self.gross_benefit_monthly),
            ("netBenefitMonthly", self.net_benefit_monthly),
            ("annualGrossBenefit", self.annual_gross_benefit),
            ("annualTotalCost", self.annual_total_cost),
            ("annualNetBenefit", self.annual_net_benefit),
            ("roi", self.roi),
            ("paybackMonths", self.payback_months),
            ("annualizedBenefitEur", self.annualized_benefit_eur),
        ]
    }
}
