//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! config file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `ROI_PROJECTION` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use roi_projection::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Program cost: {}", config.model.program_cost);
//! ```

mod error;
mod inputs;
mod logging;
mod model;
mod output;

pub use error::{ConfigError, ValidationError};
pub use inputs::InputsConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use model::{CurveConfig, ModelConfig, ScenarioConfig};
pub use output::{OutputConfig, ReportFormat};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional config file.
pub const CONFIG_PATH_VAR: &str = "ROI_PROJECTION_CONFIG";

const ENV_PREFIX: &str = "ROI_PROJECTION";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields the standard
/// model with the sample business inputs.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Projection model (program cost, ramp, curve, scenarios)
    #[serde(default)]
    pub model: ModelConfig,

    /// Business inputs to project from
    #[serde(default)]
    pub inputs: InputsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `ROI_PROJECTION_CONFIG`, if set
    /// 3. Reads environment variables with `ROI_PROJECTION` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ROI_PROJECTION__MODEL__PROGRAM_COST=6000` -> `model.program_cost = 6000`
    /// - `ROI_PROJECTION__INPUTS__AOV=35` -> `inputs.aov = 35`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        Self::load_from(path.as_deref())
    }

    /// Load configuration from an optional file, overlaid with environment variables.
    ///
    /// The file format is inferred from its extension (TOML, YAML or JSON).
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Parse configuration from a TOML document, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Business inputs are validated by the domain when a projection runs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.model.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("ROI_PROJECTION__MODEL__PROGRAM_COST");
        env::remove_var("ROI_PROJECTION__MODEL__RAMP_MONTHS");
        env::remove_var("ROI_PROJECTION__INPUTS__AOV");
        env::remove_var("ROI_PROJECTION__INPUTS__CONVERSION_RATE");
        env::remove_var("ROI_PROJECTION__OUTPUT__FORMAT");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load_from(None).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ROI_PROJECTION__MODEL__PROGRAM_COST", "7200");
        env::set_var("ROI_PROJECTION__MODEL__RAMP_MONTHS", "4");
        env::set_var("ROI_PROJECTION__INPUTS__AOV", "35.5");
        env::set_var("ROI_PROJECTION__OUTPUT__FORMAT", "yaml");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.model.program_cost, 7200.0);
        assert_eq!(config.model.ramp_months, 4);
        assert_eq!(config.inputs.aov, 35.5);
        assert_eq!(config.inputs.conversion_rate, 1.5);
        assert_eq!(config.output.format, ReportFormat::Yaml);
    }

    #[test]
    fn test_load_from_file_with_environment_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[model]
program_cost = 4000

[[model.scenarios]]
label = "Modest"
target_visibility = 45

[[model.scenarios]]
label = "Stretch"
target_visibility = 90

[inputs]
aov = 60
conversion_rate = 2.5
"#
        )
        .unwrap();

        env::set_var("ROI_PROJECTION__INPUTS__CONVERSION_RATE", "3");
        let result = AppConfig::load_from(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.model.program_cost, 4000.0);
        assert_eq!(config.model.scenarios.len(), 2);
        assert_eq!(config.model.scenarios[1].label, "Stretch");
        assert_eq!(config.inputs.aov, 60.0);
        assert_eq!(config.inputs.conversion_rate, 3.0);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = AppConfig::load_from(Some(missing.as_path()));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_from_toml_str_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
[model.curve]
slope = 50.0

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.model.curve.slope, 50.0);
        assert_eq!(config.model.curve.intercept, -850.0);
        assert_eq!(config.model.program_cost, 5550.0);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_types() {
        let result = AppConfig::from_toml_str(
            r#"
[model]
ramp_months = "three"
"#,
        );
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_reports_model_errors() {
        let config = AppConfig::from_toml_str(
            r#"
[model]
ramp_months = 0
"#,
        )
        .unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidRampMonths));
    }

    #[test]
    fn test_config_error_wraps_validation() {
        let err: ConfigError = ValidationError::InvalidRampMonths.into();
        assert_eq!(
            err.to_string(),
            "Validation failed: Ramp length must be between 1 and 60 months"
        );
    }
}
