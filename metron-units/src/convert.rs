//! Conversion facade
//!
//! Parses the raw input, dispatches on the category kind, formats the result
//! and renders the display line. Every failure comes back as a
//! `ConversionError`; nothing here panics on bad input.

use metron_core::{format_number, parse_number, ConversionError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::temperature::convert_temperature;
use crate::units::UNITS;
use crate::{Category, CategoryKind};

/// Prefix for the single user-facing failure line
pub const ERROR_PREFIX: &str = "Conversion error: ";

/// One conversion attempt as collected from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Raw input exactly as typed
    pub value: String,
    #[serde(default)]
    pub scientific: bool,
}

impl ConversionRequest {
    pub fn new(category: &str, from_unit: &str, to_unit: &str, value: &str, scientific: bool) -> Self {
        ConversionRequest {
            category: category.to_string(),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            value: value.to_string(),
            scientific,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub category: Category,
    /// Unrounded numeric result
    pub value: f64,
    /// `value` rendered by the number formatter
    pub formatted: String,
    /// "<input> <from_unit> = <formatted> <to_unit>"
    pub display: String,
}

/// Convert an already-parsed value within a category
pub fn convert_value(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    match UNITS.lookup(category) {
        CategoryKind::Linear(table) => table.convert(value, from, to),
        CategoryKind::Affine => convert_temperature(value, from, to),
    }
}

pub fn convert_request(request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
    let outcome = run_request(request);
    match &outcome {
        Ok(result) => debug!(
            category = %result.category,
            from = %request.from_unit,
            to = %request.to_unit,
            result = result.value,
            "converted"
        ),
        Err(e) => warn!(
            category = %request.category,
            code = e.code(),
            error = %e,
            "conversion rejected"
        ),
    }
    outcome
}

fn run_request(request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
    let input = parse_number(&request.value)?;
    let category: Category = request.category.parse()?;
    let value = convert_value(category, input, &request.from_unit, &request.to_unit)?;
    let formatted = format_number(value, request.scientific);
    let display = format!(
        "{} {} = {} {}",
        request.value, request.from_unit, formatted, request.to_unit
    );

    Ok(ConversionResult {
        category,
        value,
        formatted,
        display,
    })
}

/// Run one conversion and return its display line
pub fn perform_conversion(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    raw_input: &str,
    scientific: bool,
) -> Result<String, ConversionError> {
    let request = ConversionRequest::new(category, from_unit, to_unit, raw_input, scientific);
    convert_request(&request).map(|result| result.display)
}

/// Collapse an outcome into the single line shown to the user
pub fn render_outcome(outcome: &Result<String, ConversionError>) -> String {
    match outcome {
        Ok(line) => line.clone(),
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}
