//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Program cost must be a finite, non-negative amount")]
    InvalidProgramCost,

    #[error("Ramp length must be between 1 and 60 months")]
    InvalidRampMonths,

    #[error("At least one scenario must be configured")]
    NoScenarios,

    #[error("Scenario label cannot be empty")]
    EmptyScenarioLabel,

    #[error("Duplicate scenario label: {0}")]
    DuplicateScenarioLabel(String),

    #[error("Scenario '{0}' target visibility must be between 0 and 100")]
    ScenarioTargetOutOfRange(String),

    #[error("Visibility curve must have a finite intercept and a positive slope")]
    NonPositiveCurveSlope,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
