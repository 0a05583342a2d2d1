use anyhow::Result;
use clap::Parser;
use roi_calc::app::report;
use roi_calc::config::scenario::ScenarioConfig;
use roi_calc::utils::export;
use roi_calc::{CliConfig, Field, Session};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const REFERENCE_SCENARIO: &str = r#"
[scenario]
name = "invoice-automation"

[inputs]
wageEurPerHour = 35
hoursSavedPerUnit = 0.25
unitsPerMonth = 1200
baselineErrorsPerMonth = 60
errorReductionPct = 40
costPerErrorEur = 25
oneTimeCostEur = 8000
monthlyRecurringCostEur = 400
"#;

#[test]
fn scenario_file_to_metrics() -> Result<()> {
    let mut scenario_file = NamedTempFile::new()?;
    scenario_file.write_all(REFERENCE_SCENARIO.as_bytes())?;

    let config = ScenarioConfig::from_file(scenario_file.path())?;
    let mut session = Session::new();
    let snapshot = session
        .apply(&config.inputs)
        .expect("reference scenario must validate");

    assert_eq!(snapshot.output.labor_savings_monthly, 10500.0);
    assert_eq!(snapshot.output.error_savings_monthly, 600.0);
    assert_eq!(snapshot.output.net_benefit_monthly, 10700.0);
    assert_eq!(snapshot.output.annual_net_benefit, 120400.0);
    assert_eq!(snapshot.output.roi, 9.40625);
    assert!((snapshot.output.payback_months - 0.7477).abs() < 1e-4);
    Ok(())
}

#[test]
fn scenario_typo_surfaces_as_field_reason() -> Result<()> {
    let broken = REFERENCE_SCENARIO.replace("unitsPerMonth = 1200", "unitsPerMonth = \"1,200\"");
    let config = ScenarioConfig::from_toml_str(&broken)?;

    let mut session = Session::new();
    let report = session.apply(&config.inputs).unwrap_err();
    assert!(!report.ok);
    assert_eq!(report.reason(Field::UnitsPerMonth), Some("must be a number."));
    assert!(session.last().is_none());
    Ok(())
}

#[test]
fn cli_flags_reach_the_same_metrics() -> Result<()> {
    let config = CliConfig::parse_from([
        "roi-calc",
        "--wage-eur-per-hour=35",
        "--hours-saved-per-unit=0.25",
        "--units-per-month=1200",
        "--baseline-errors-per-month=60",
        "--error-reduction-pct=40",
        "--cost-per-error-eur=25",
        "--one-time-cost-eur=8000",
        "--monthly-recurring-cost-eur=400",
    ]);
    let raw = config.partial_record()?;

    let mut session = Session::new();
    let snapshot = session.apply(&raw).expect("flag inputs must validate");
    assert_eq!(snapshot.output.gross_benefit_monthly, 11100.0);
    assert_eq!(snapshot.output.annual_total_cost, 12800.0);
    Ok(())
}

#[test]
fn missing_flags_are_reported_per_field() -> Result<()> {
    let config = CliConfig::parse_from(["roi-calc", "--wage-eur-per-hour=35"]);
    let raw = config.partial_record()?;

    let mut session = Session::new();
    let report = session.apply(&raw).unwrap_err();
    assert_eq!(report.errors.len(), 7);
    assert_eq!(report.reason(Field::WageEurPerHour), None);
    assert_eq!(report.reason(Field::UnitsPerMonth), Some("is required."));
    Ok(())
}

#[test]
fn snapshot_exports_to_csv_and_json() -> Result<()> {
    let config = ScenarioConfig::from_toml_str(REFERENCE_SCENARIO)?;
    let mut session = Session::new();
    let snapshot = *session.apply(&config.inputs).expect("must validate");

    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("metrics.csv");
    export::write_snapshot_csv(&csv_path, &snapshot)?;

    let mut reader = csv::Reader::from_path(&csv_path)?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 18);

    let json = report::render_json(&snapshot);
    assert_eq!(json["output"]["roi"], serde_json::json!(9.40625));
    Ok(())
}

#[test]
fn free_automation_reports_infinite_roi() -> Result<()> {
    let zero_cost = REFERENCE_SCENARIO
        .replace("oneTimeCostEur = 8000", "oneTimeCostEur = 0")
        .replace("monthlyRecurringCostEur = 400", "monthlyRecurringCostEur = 0");
    let config = ScenarioConfig::from_toml_str(&zero_cost)?;

    let mut session = Session::new();
    let snapshot = session.apply(&config.inputs).expect("must validate");
    assert_eq!(snapshot.output.roi, f64::INFINITY);

    let json = report::render_json(snapshot);
    assert_eq!(json["output"]["roi"], serde_json::json!("Infinity"));
    Ok(())
}
