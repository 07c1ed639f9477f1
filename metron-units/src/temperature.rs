//! Temperature conversion
//!
//! Temperature scales differ in zero point as well as step size, so they do
//! not fit a factor table. Every conversion pivots through Celsius.

use metron_core::ConversionError;
use serde::{Deserialize, Serialize};

/// Selectable temperature labels, in display order
pub const TEMPERATURE_UNITS: [&str; 3] = ["celsius (°C)", "fahrenheit (°F)", "kelvin (K)"];

/// Offset between the Kelvin and Celsius zero points
pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => TEMPERATURE_UNITS[0],
            TemperatureScale::Fahrenheit => TEMPERATURE_UNITS[1],
            TemperatureScale::Kelvin => TEMPERATURE_UNITS[2],
        }
    }

    /// Identify a scale by the label's leading word, ignoring case and any
    /// decoration after it ("kelvin (K)", "Kelvin", "kelvin").
    pub fn from_label(label: &str) -> Result<Self, ConversionError> {
        let token: String = label
            .trim_start()
            .chars()
            .take_while(|c| c.is_alphabetic())
            .collect::<String>()
            .to_lowercase();

        match token.as_str() {
            "celsius" => Ok(TemperatureScale::Celsius),
            "fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" => Ok(TemperatureScale::Kelvin),
            _ => Err(ConversionError::UnknownTemperatureUnit(label.to_string())),
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - KELVIN_OFFSET,
        }
    }

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

/// Convert a temperature between two labelled scales via Celsius
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from = TemperatureScale::from_label(from)?;
    let to = TemperatureScale::from_label(to)?;
    Ok(to.from_celsius(from.to_celsius(value)))
}
