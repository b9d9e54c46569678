//! Request parsing from YAML/JSON.

use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::validate_request_schema;
use crate::limits::{Range, EXOTIC_ENERGY_DENSITY_RANGE, THROAT_RADIUS_RANGE, TIME_RANGE};
use crate::types::GateRequest;

/// Errors that can occur when loading a request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to read request file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Request failed schema validation: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl GateRequest {
    /// Parse a request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RequestError> {
        Self::from_value(yaml_document(yaml)?)
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a request from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a request from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a request file, choosing JSON for `.json` and YAML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        Self::from_value(file_document(path.as_ref())?)
    }

    /// Parse a request file without the schema or range checks.
    ///
    /// Field names and types are still enforced. Callers are expected to
    /// clamp and then `validate` the result.
    pub fn from_file_unchecked(path: impl AsRef<Path>) -> Result<Self, RequestError> {
        let request: GateRequest = serde_json::from_value(file_document(path.as_ref())?)?;
        Ok(request)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, RequestError> {
        validate_request_schema(&value).map_err(RequestError::SchemaError)?;
        let request: GateRequest = serde_json::from_value(value)?;
        request.validate()?;
        Ok(request)
    }

    /// Check every ranged input against its control's range.
    pub fn validate(&self) -> Result<(), RequestError> {
        check_range("throat_radius", self.throat_radius, THROAT_RADIUS_RANGE)?;
        check_range(
            "exotic_energy_density",
            self.exotic_energy_density,
            EXOTIC_ENERGY_DENSITY_RANGE,
        )?;
        check_range("current_time", self.current_time, TIME_RANGE)?;
        check_range("target_time", self.target_time, TIME_RANGE)?;

        if let Some(decay_rate) = self.decay_rate {
            if !decay_rate.is_finite() {
                return Err(RequestError::NotFinite {
                    field: "decay_rate",
                    value: decay_rate,
                });
            }
        }

        Ok(())
    }

    /// Copy of this request with every ranged input clamped into range.
    pub fn clamped(&self) -> Self {
        Self {
            throat_radius: THROAT_RADIUS_RANGE.clamp(self.throat_radius),
            exotic_energy_density: EXOTIC_ENERGY_DENSITY_RANGE.clamp(self.exotic_energy_density),
            state_label: self.state_label.clone(),
            current_time: TIME_RANGE.clamp(self.current_time),
            target_time: TIME_RANGE.clamp(self.target_time),
            decay_rate: self.decay_rate,
        }
    }
}

fn yaml_document(yaml: &str) -> Result<serde_json::Value, RequestError> {
    // An empty document deserialises to unit, not a map.
    if yaml.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    Ok(serde_yaml::from_str(yaml)?)
}

fn file_document(path: &Path) -> Result<serde_json::Value, RequestError> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(serde_json::from_str(&contents)?)
    } else {
        yaml_document(&contents)
    }
}

fn check_range(field: &'static str, value: f64, range: Range) -> Result<(), RequestError> {
    if !value.is_finite() {
        return Err(RequestError::NotFinite { field, value });
    }
    if !range.contains(value) {
        return Err(RequestError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_REQUEST: &str = r#"
throat_radius: 0.05
exotic_energy_density: 200
state_label: "Q-Event-42"
current_time: 900
target_time: 900
"#;

    #[test]
    fn test_parse_valid_request() {
        let request = GateRequest::from_yaml(VALID_REQUEST).unwrap();
        assert_eq!(request.throat_radius, 0.05);
        assert_eq!(request.exotic_energy_density, 200.0);
        assert_eq!(request.state_label, "Q-Event-42");
        assert_eq!(request.decay_rate, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(GateRequest::from_yaml("").unwrap(), GateRequest::default());
    }

    #[test]
    fn test_parse_json() {
        let request =
            GateRequest::from_json(r#"{"state_label": "alpha", "decay_rate": 0.2}"#).unwrap();
        assert_eq!(request.state_label, "alpha");
        assert_eq!(request.decay_rate, Some(0.2));
    }

    #[test]
    fn test_schema_rejects_out_of_range() {
        let result = GateRequest::from_yaml("exotic_energy_density: 500");
        assert!(matches!(result, Err(RequestError::SchemaError(_))));
    }

    #[test]
    fn test_schema_rejects_unknown_field() {
        let result = GateRequest::from_json(r#"{"q_state": "Q-Event-42"}"#);
        assert!(matches!(result, Err(RequestError::SchemaError(_))));
    }

    #[test]
    fn test_validate_out_of_range() {
        let request = GateRequest::new(0.5, 100.0, "x", 0.0, 0.0);
        assert!(matches!(
            request.validate(),
            Err(RequestError::OutOfRange {
                field: "throat_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_not_finite() {
        let request = GateRequest::new(0.01, f64::NAN, "x", 0.0, 0.0);
        assert!(matches!(
            request.validate(),
            Err(RequestError::NotFinite {
                field: "exotic_energy_density",
                ..
            })
        ));

        let request = GateRequest::default().with_decay_rate(f64::INFINITY);
        assert!(matches!(
            request.validate(),
            Err(RequestError::NotFinite {
                field: "decay_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_decay_rate_allowed() {
        let request = GateRequest::default().with_decay_rate(-0.1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_clamped_enters_range() {
        let request = GateRequest::new(1.0, 5.0, "x", 20_000.0, -5.0).clamped();
        assert_eq!(request.throat_radius, 0.05);
        assert_eq!(request.exotic_energy_density, 10.0);
        assert_eq!(request.current_time, 10_000.0);
        assert_eq!(request.target_time, 0.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("request.json");
        std::fs::write(&json_path, r#"{"state_label": "from-json"}"#).unwrap();
        assert_eq!(GateRequest::from_file(&json_path).unwrap().state_label, "from-json");

        let yaml_path = dir.path().join("request.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "state_label: from-yaml").unwrap();
        assert_eq!(GateRequest::from_file(&yaml_path).unwrap().state_label, "from-yaml");
    }

    #[test]
    fn test_format_specific_file_loaders() {
        let dir = tempfile::tempdir().unwrap();

        // Format is fixed by the loader, not the extension
        let path = dir.path().join("request.txt");
        std::fs::write(&path, r#"{"state_label": "braces"}"#).unwrap();
        assert_eq!(GateRequest::from_json_file(&path).unwrap().state_label, "braces");

        std::fs::write(&path, "state_label: plain\n").unwrap();
        assert_eq!(GateRequest::from_yaml_file(&path).unwrap().state_label, "plain");
        assert!(matches!(
            GateRequest::from_json_file(&path),
            Err(RequestError::JsonError(_))
        ));
    }

    #[test]
    fn test_unchecked_load_keeps_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        std::fs::write(&path, "throat_radius: 0.5\ntarget_time: -20\n").unwrap();

        assert!(matches!(
            GateRequest::from_file(&path),
            Err(RequestError::SchemaError(_))
        ));

        let request = GateRequest::from_file_unchecked(&path).unwrap();
        assert_eq!(request.throat_radius, 0.5);
        assert_eq!(request.target_time, -20.0);

        let clamped = request.clamped();
        assert_eq!(clamped.throat_radius, 0.05);
        assert_eq!(clamped.target_time, 0.0);
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_unchecked_load_still_rejects_unknown_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, r#"{"q_state": "Q-Event-42"}"#).unwrap();

        assert!(matches!(
            GateRequest::from_file_unchecked(&path),
            Err(RequestError::JsonError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = GateRequest::from_file("/nonexistent/request.yaml");
        assert!(matches!(result, Err(RequestError::IoError(_))));
    }
}
