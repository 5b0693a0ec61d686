//! Business input configuration

use serde::Deserialize;

use crate::domain::projection::RawBusinessInputs;

/// Order economics to project from.
///
/// Values are checked by the domain when converted into `BusinessInputs`,
/// not here.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct InputsConfig {
    /// Average order value
    #[serde(default = "default_aov")]
    pub aov: f64,

    /// Conversion rate in percent
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: f64,

    /// Orders per day
    #[serde(default = "default_daily_orders")]
    pub daily_orders: f64,

    /// Visibility score in percent
    #[serde(default = "default_current_visibility")]
    pub current_visibility: f64,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            aov: default_aov(),
            conversion_rate: default_conversion_rate(),
            daily_orders: default_daily_orders(),
            current_visibility: default_current_visibility(),
        }
    }
}

impl From<InputsConfig> for RawBusinessInputs {
    fn from(config: InputsConfig) -> Self {
        Self {
            aov: config.aov,
            conversion_rate: config.conversion_rate,
            daily_orders: config.daily_orders,
            current_visibility: config.current_visibility,
        }
    }
}

fn default_aov() -> f64 {
    28.0
}

fn default_conversion_rate() -> f64 {
    1.5
}

fn default_daily_orders() -> f64 {
    27.0
}

fn default_current_visibility() -> f64 {
    33.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_defaults() {
        let raw: RawBusinessInputs = InputsConfig::default().into();
        assert_eq!(raw.aov, 28.0);
        assert_eq!(raw.conversion_rate, 1.5);
        assert_eq!(raw.daily_orders, 27.0);
        assert_eq!(raw.current_visibility, 33.0);
    }

    #[test]
    fn test_inputs_partial_deserialization() {
        let inputs: InputsConfig = serde_json::from_str(r#"{"aov": 42.0}"#).unwrap();
        assert_eq!(inputs.aov, 42.0);
        assert_eq!(inputs.daily_orders, 27.0);
    }
}
