pub mod scenario;

use crate::domain::model::{Field, PartialInputRecord};
use crate::utils::error::Result;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roi-calc")]
#[command(about = "Computes automation ROI metrics from labor, error, and cost inputs")]
pub struct CliConfig {
    /// TOML scenario file with an [inputs] table; takes precedence over the
    /// individual field flags
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub wage_eur_per_hour: Option<f64>,

    #[arg(long)]
    pub hours_saved_per_unit: Option<f64>,

    #[arg(long)]
    pub units_per_month: Option<f64>,

    #[arg(long)]
    pub baseline_errors_per_month: Option<f64>,

    #[arg(long)]
    pub error_reduction_pct: Option<f64>,

    #[arg(long)]
    pub cost_per_error_eur: Option<f64>,

    #[arg(long)]
    pub one_time_cost_eur: Option<f64>,

    #[arg(long)]
    pub monthly_recurring_cost_eur: Option<f64>,

    /// Emit the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Write the result as a metric,value CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

// clap has already parsed the flag to f64, but NaN survives that parse;
// re-encoding it as a string keeps the validator's NaN reason reachable.
fn flag_value(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}

impl CliConfig {
    /// Assembles the candidate record the validator will judge, either from
    /// the scenario file or from the individual flags. Absent flags stay
    /// absent so the validator can report them as required.
    pub fn partial_record(&self) -> Result<PartialInputRecord> {
        if let Some(path) = &self.input {
            return Ok(scenario::ScenarioConfig::from_file(path)?.inputs);
        }

        let mut raw = PartialInputRecord::default();
        let flags = [
            (Field::WageEurPerHour, self.wage_eur_per_hour),
            (Field::HoursSavedPerUnit, self.hours_saved_per_unit),
            (Field::UnitsPerMonth, self.units_per_month),
            (Field::BaselineErrorsPerMonth, self.baseline_errors_per_month),
            (Field::ErrorReductionPct, self.error_reduction_pct),
            (Field::CostPerErrorEur, self.cost_per_error_eur),
            (Field::OneTimeCostEur, self.one_time_cost_eur),
            (Field::MonthlyRecurringCostEur, self.monthly_recurring_cost_eur),
        ];
        for (field, flag) in flags {
            if let Some(value) = flag {
                raw.set(field, flag_value(value));
            }
        }
        Ok(raw)
    }
}
