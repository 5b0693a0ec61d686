//! Business inputs and the baseline derived from them.

use serde::{Deserialize, Serialize};

use super::DAYS_PER_MONTH;
use crate::domain::foundation::{InvalidInput, Percentage, ProjectionError, ValidationError};

/// Unvalidated order economics as entered by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawBusinessInputs {
    pub aov: f64,
    pub conversion_rate: f64,
    pub daily_orders: f64,
    pub current_visibility: f64,
}

/// Validated order economics for one calculation run.
///
/// # Invariants
/// - `aov` is finite and greater than zero
/// - `conversion_rate` is in (0, 100]
/// - `daily_orders` is finite and non-negative
/// - `current_visibility` is in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBusinessInputs", into = "RawBusinessInputs")]
pub struct BusinessInputs {
    aov: f64,
    conversion_rate: Percentage,
    daily_orders: f64,
    current_visibility: Percentage,
}

impl BusinessInputs {
    /// Validates and creates a new set of inputs.
    ///
    /// # Errors
    /// - `ValidationError` for non-finite or out-of-range values
    /// - `InvalidInput::ZeroConversionRate` when the conversion rate is exactly zero
    pub fn new(
        aov: f64,
        conversion_rate: f64,
        daily_orders: f64,
        current_visibility: f64,
    ) -> Result<Self, ProjectionError> {
        if !aov.is_finite() {
            return Err(ValidationError::not_finite("aov").into());
        }
        if aov <= 0.0 {
            return Err(ValidationError::must_be_positive("aov", aov).into());
        }

        let conversion_rate = Percentage::try_for_field("conversion_rate", conversion_rate)?;
        if conversion_rate.value() == 0.0 {
            return Err(InvalidInput::ZeroConversionRate.into());
        }

        if !daily_orders.is_finite() {
            return Err(ValidationError::not_finite("daily_orders").into());
        }
        if daily_orders < 0.0 {
            return Err(
                ValidationError::out_of_range("daily_orders", 0.0, f64::MAX, daily_orders).into(),
            );
        }

        let current_visibility =
            Percentage::try_for_field("current_visibility", current_visibility)?;

        Ok(Self {
            aov,
            conversion_rate,
            daily_orders,
            current_visibility,
        })
    }

    /// Average order value, currency per order.
    pub fn aov(&self) -> f64 {
        self.aov
    }

    /// Conversion rate as a percentage.
    pub fn conversion_rate(&self) -> Percentage {
        self.conversion_rate
    }

    /// Orders placed per day today.
    pub fn daily_orders(&self) -> f64 {
        self.daily_orders
    }

    /// Visibility score today.
    pub fn current_visibility(&self) -> Percentage {
        self.current_visibility
    }
}

impl TryFrom<RawBusinessInputs> for BusinessInputs {
    type Error = ProjectionError;

    fn try_from(raw: RawBusinessInputs) -> Result<Self, Self::Error> {
        Self::new(
            raw.aov,
            raw.conversion_rate,
            raw.daily_orders,
            raw.current_visibility,
        )
    }
}

impl From<BusinessInputs> for RawBusinessInputs {
    fn from(inputs: BusinessInputs) -> Self {
        Self {
            aov: inputs.aov,
            conversion_rate: inputs.conversion_rate.value(),
            daily_orders: inputs.daily_orders,
            current_visibility: inputs.current_visibility.value(),
        }
    }
}

/// Today's traffic and monthly orders before any visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub visitors_today: f64,
    pub orders_today: f64,
}

impl Baseline {
    /// Derives the baseline from validated inputs.
    ///
    /// `orders_today` is a monthly figure on the 30-day month convention.
    pub fn derive(inputs: &BusinessInputs) -> Self {
        Self {
            visitors_today: inputs.daily_orders / inputs.conversion_rate.as_fraction(),
            orders_today: inputs.daily_orders * DAYS_PER_MONTH,
        }
    }
}
