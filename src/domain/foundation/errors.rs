//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be greater than zero, got {actual}")]
    MustBePositive { field: String, actual: f64 },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a must-be-positive validation error.
    pub fn must_be_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field, .. }
            | ValidationError::NotFinite { field } => field,
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } | ValidationError::MustBePositive { .. } => {
                ErrorCode::OutOfRange
            }
            ValidationError::NotFinite { .. } => ErrorCode::NotFinite,
        }
    }
}

/// Inputs that pass range checks but leave the model undefined.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("conversion rate must be greater than zero")]
    ZeroConversionRate,

    #[error(
        "current visibility {current_visibility}% is at or below the root of the visibility \
         curve; any visibility at or below the root cannot anchor visitors"
    )]
    DegenerateAnchor { current_visibility: f64 },
}

/// Error returned by projection operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl ProjectionError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectionError::Validation(err) => err.code(),
            ProjectionError::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    NotFinite,

    // Model errors
    InvalidInput,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::NotFinite => "NOT_FINITE",
            ErrorCode::InvalidInput => "INVALID_INPUT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("label");
        assert_eq!(format!("{}", err), "Field 'label' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("current_visibility", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'current_visibility' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_must_be_positive_displays_correctly() {
        let err = ValidationError::must_be_positive("aov", -3.5);
        assert_eq!(
            format!("{}", err),
            "Field 'aov' must be greater than zero, got -3.5"
        );
    }

    #[test]
    fn validation_error_reports_field() {
        assert_eq!(ValidationError::not_finite("daily_orders").field(), "daily_orders");
        assert_eq!(ValidationError::empty_field("label").field(), "label");
    }

    #[test]
    fn invalid_input_wraps_into_projection_error() {
        let err: ProjectionError = InvalidInput::ZeroConversionRate.into();
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(
            format!("{}", err),
            "Invalid input: conversion rate must be greater than zero"
        );
    }

    #[test]
    fn validation_wraps_transparently() {
        let err: ProjectionError = ValidationError::not_finite("aov").into();
        assert_eq!(err.code(), ErrorCode::NotFinite);
        assert_eq!(format!("{}", err), "Field 'aov' must be a finite number");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidInput), "INVALID_INPUT");
        assert_eq!(format!("{}", ErrorCode::OutOfRange), "OUT_OF_RANGE");
        assert_eq!(format!("{}", ErrorCode::EmptyField), "EMPTY_FIELD");
        assert_eq!(format!("{}", ErrorCode::NotFinite), "NOT_FINITE");
    }

    #[test]
    fn every_validation_failure_maps_to_a_specific_code() {
        let cases = [
            (ValidationError::empty_field("label"), ErrorCode::EmptyField),
            (
                ValidationError::out_of_range("current_visibility", 0.0, 100.0, 150.0),
                ErrorCode::OutOfRange,
            ),
            (ValidationError::must_be_positive("aov", -1.0), ErrorCode::OutOfRange),
            (ValidationError::not_finite("aov"), ErrorCode::NotFinite),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }
}
