use crate::app::session::Snapshot;
use crate::utils::format;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Human-readable text report for the terminal.
pub fn render_text(snapshot: &Snapshot) -> String {
    let output = &snapshot.output;
    let mut text = String::new();
    let mut line = |label: &str, value: String| {
        let _ = writeln!(text, "{:<28}{}", label, value);
    };

    line("Labor savings / month", format::format_eur(output.labor_savings_monthly));
    line("Error savings / month", format::format_eur(output.error_savings_monthly));
    line("Gross benefit / month", format::format_eur(output.gross_benefit_monthly));
    line("Net benefit / month", format::format_eur(output.net_benefit_monthly));
    line("Annual gross benefit", format::format_eur(output.annual_gross_benefit));
    line("Annual total cost", format::format_eur(output.annual_total_cost));
    line("Annual net benefit", format::format_eur(output.annual_net_benefit));
    line("ROI", format::format_percent(output.roi));
    line("Payback", format::format_months(output.payback_months));
    line("Annualized benefit", format::format_eur(output.annualized_benefit_eur));
    text
}

/// JSON report with non-finite values spelled out; plain serde would turn
/// an infinite ROI into null.
pub fn render_json(snapshot: &Snapshot) -> Value {
    let mut input = Map::new();
    for (name, value) in snapshot.input.fields() {
        input.insert(name.to_string(), format::json_value(value));
    }
    let mut output = Map::new();
    for (name, value) in snapshot.output.fields() {
        output.insert(name.to_string(), format::json_value(value));
    }
    Value::Object(Map::from_iter([
        ("input".to_string(), Value::Object(input)),
        ("output".to_string(), Value::Object(output)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator;
    use crate::domain::model::InputRecord;
    use serde_json::json;

    fn snapshot() -> Snapshot {
        let input = InputRecord {
            wage_eur_per_hour: 35.0,
            hours_saved_per_unit: 0.25,
            units_per_month: 1200.0,
            baseline_errors_per_month: 60.0,
            error_reduction_pct: 40.0,
            cost_per_error_eur: 25.0,
            one_time_cost_eur: 8000.0,
            monthly_recurring_cost_eur: 400.0,
        };
        Snapshot {
            input,
            output: calculator::compute(&input),
        }
    }

    #[test]
    fn text_report_formats_key_lines() {
        let text = render_text(&snapshot());
        assert!(text.contains("11.100,00 €"));
        assert!(text.contains("940,6 %"));
        assert!(text.contains("0,7 months"));
    }

    #[test]
    fn json_report_carries_both_records() {
        let value = render_json(&snapshot());
        assert_eq!(value["input"]["wageEurPerHour"], json!(35.0));
        assert_eq!(value["output"]["annualNetBenefit"], json!(120400.0));
    }

    #[test]
    fn json_report_spells_out_no_payback() {
        let input = InputRecord::default();
        let snapshot = Snapshot {
            input,
            output: calculator::compute(&input),
        };
        let value = render_json(&snapshot);
        assert_eq!(value["output"]["roi"], json!("Infinity"));
        assert_eq!(value["output"]["paybackMonths"], json!("Infinity"));
    }
}
