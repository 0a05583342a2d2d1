use crate::domain::model::{Field, InputRecord, PartialInputRecord};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-field verdict for a candidate record. `ok` is true iff no field has a
/// reason recorded. Failures are returned as data, never as `Err` or a panic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        ValidationReport {
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn reason(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        // "NaN" parses to f64::NAN here, which the NaN check then catches.
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// One reason per field, in precedence order:
/// missing, not a number, NaN, negative, out of range.
fn check_field(field: Field, value: Option<&Value>) -> Result<f64, &'static str> {
    let value = match value {
        None | Some(Value::Null) => return Err("is required."),
        Some(value) => value,
    };
    let number = match coerce_number(value) {
        Some(number) => number,
        None => return Err("must be a number."),
    };
    if number.is_nan() {
        return Err("cannot be NaN.");
    }
    if number < 0.0 {
        return Err("cannot be negative.");
    }
    if field == Field::ErrorReductionPct && number > 100.0 {
        return Err("must be between 0 and 100.");
    }
    Ok(number)
}

/// Checks every field independently and returns the validated record, or the
/// report covering all failing fields. A failure in one field does not
/// suppress checks on the others.
pub fn parse(raw: &PartialInputRecord) -> Result<InputRecord, ValidationReport> {
    let mut errors = BTreeMap::new();
    let mut values = [0.0f64; 8];

    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        match check_field(field, raw.get(field)) {
            Ok(number) => *slot = number,
            Err(reason) => {
                errors.insert(field, reason.to_string());
            }
        }
    }

    if !errors.is_empty() {
        return Err(ValidationReport::from_errors(errors));
    }

    let [wage, hours, units, baseline_errors, reduction_pct, cost_per_error, one_time, monthly] =
        values;
    Ok(InputRecord {
        wage_eur_per_hour: wage,
        hours_saved_per_unit: hours,
        units_per_month: units,
        baseline_errors_per_month: baseline_errors,
        error_reduction_pct: reduction_pct,
        cost_per_error_eur: cost_per_error,
        one_time_cost_eur: one_time,
        monthly_recurring_cost_eur: monthly,
    })
}

/// Verdict-only form of [`parse`], for callers that only need the report.
pub fn validate(raw: &PartialInputRecord) -> ValidationReport {
    match parse(raw) {
        Ok(_) => ValidationReport::from_errors(BTreeMap::new()),
        Err(report) => report,
    }
}
