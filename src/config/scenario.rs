use crate::domain::model::PartialInputRecord;
use crate::utils::error::{Result, RoiError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved ROI scenario. The `[inputs]` table is deliberately loose: values
/// of any TOML type are accepted here and judged by the validator, so a
/// typo in a scenario file surfaces as a field-level reason rather than a
/// parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: Option<ScenarioMeta>,
    #[serde(default)]
    pub inputs: PartialInputRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RoiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RoiError::ScenarioError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Field;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_basic_scenario() {
        let toml_content = r#"
[scenario]
name = "invoice-automation"
description = "OCR pipeline for inbound invoices"

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

        let config = ScenarioConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.scenario.unwrap().name, "invoice-automation");
        assert_eq!(config.inputs.get(Field::WageEurPerHour), Some(&json!(35)));
        assert_eq!(config.inputs.get(Field::HoursSavedPerUnit), Some(&json!(0.25)));
    }

    #[test]
    fn junk_values_survive_parsing_for_the_validator() {
        let toml_content = r#"
[inputs]
wageEurPerHour = "thirty-five"
unitsPerMonth = true
"#;

        let config = ScenarioConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.inputs.get(Field::WageEurPerHour),
            Some(&json!("thirty-five"))
        );
        assert_eq!(config.inputs.get(Field::UnitsPerMonth), Some(&json!(true)));
    }

    #[test]
    fn missing_inputs_table_yields_empty_record() {
        let config = ScenarioConfig::from_toml_str("").unwrap();
        assert_eq!(config.inputs, PartialInputRecord::default());
    }

    #[test]
    fn scenario_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inputs]\nwageEurPerHour = 20\n")
            .unwrap();

        let config = ScenarioConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.inputs.get(Field::WageEurPerHour), Some(&json!(20)));
    }

    #[test]
    fn invalid_toml_reports_scenario_error() {
        assert!(ScenarioConfig::from_toml_str("[inputs\n").is_err());
    }
}
