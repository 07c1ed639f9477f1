//! Unit tables and linear conversion

use std::collections::HashMap;

use metron_core::ConversionError;
use serde::{Deserialize, Serialize};

use crate::Category;

/// A selectable unit and its size in the category's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display label (e.g., "kilogram (kg)")
    pub label: String,
    /// How many base units one of this unit equals
    pub factor: f64,
}

impl Unit {
    pub fn new(label: &str, factor: f64) -> Self {
        Unit {
            label: label.to_string(),
            factor,
        }
    }

    /// Check if this is the category's base unit
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }
}

/// Ordered factor table for one linear category.
///
/// Labels are unique and every factor is finite and strictly positive.
/// Insertion order is display order.
#[derive(Debug, Clone)]
pub struct UnitTable {
    category: Category,
    units: Vec<Unit>,
    index: HashMap<String, usize>,
}

impl UnitTable {
    pub fn new(category: Category) -> Self {
        UnitTable {
            category,
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builder: append a unit. Labels must be unique within the table.
    pub fn with_unit(mut self, label: &str, factor: f64) -> Self {
        debug_assert!(
            factor.is_finite() && factor > 0.0,
            "factor for {} must be finite and positive",
            label
        );
        debug_assert!(
            !self.index.contains_key(label),
            "duplicate unit label {}",
            label
        );
        self.index.insert(label.to_string(), self.units.len());
        self.units.push(Unit::new(label, factor));
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn get(&self, label: &str) -> Option<&Unit> {
        self.index.get(label).map(|&i| &self.units[i])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Units in display order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn labels(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit with factor 1.0, if the table has one
    pub fn base_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_base())
    }

    /// Factor for a label, or `UnknownUnit`
    pub fn factor(&self, label: &str) -> Result<f64, ConversionError> {
        self.get(label)
            .map(|u| u.factor)
            .ok_or_else(|| ConversionError::unknown_unit(self.category.name(), label))
    }

    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        convert_linear(value, from, to, self)
    }
}

/// Convert `value` between two units of a table through the base unit:
/// `value * factor(from) / factor(to)`.
///
/// No rounding is applied. Converting a unit to itself returns `value`
/// bit-for-bit.
pub fn convert_linear(
    value: f64,
    from: &str,
    to: &str,
    table: &UnitTable,
) -> Result<f64, ConversionError> {
    let from_factor = table.factor(from)?;
    let to_factor = table.factor(to)?;

    if from == to {
        return Ok(value);
    }
    Ok(value * from_factor / to_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length() -> UnitTable {
        UnitTable::new(Category::Length)
            .with_unit("kilometer (km)", 1000.0)
            .with_unit("meter (m)", 1.0)
            .with_unit("foot (ft)", 0.3048)
    }

    #[test]
    fn test_base_unit() {
        let table = length();
        assert_eq!(table.base_unit().map(|u| u.label.as_str()), Some("meter (m)"));
        assert!(!table.get("kilometer (km)").unwrap().is_base());
    }

    #[test]
    fn test_display_order_preserved() {
        let table = length();
        assert_eq!(table.labels(), ["kilometer (km)", "meter (m)", "foot (ft)"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate unit label")]
    fn test_repeated_label_rejected() {
        let _ = length().with_unit("foot (ft)", 0.3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite and positive")]
    fn test_non_positive_factor_rejected() {
        let _ = length().with_unit("void", 0.0);
    }

    #[test]
    fn test_linear_conversion() {
        let table = length();
        assert_eq!(convert_linear(5.0, "kilometer (km)", "meter (m)", &table), Ok(5000.0));
        assert_eq!(convert_linear(5000.0, "meter (m)", "kilometer (km)", &table), Ok(5.0));
        assert_eq!(table.convert(1.0, "foot (ft)", "meter (m)"), Ok(0.3048));
    }

    #[test]
    fn test_self_conversion_is_exact() {
        let table = length();
        for value in [0.1, 1.0 / 3.0, -7.25, 1e300, f64::MAX] {
            assert_eq!(table.convert(value, "foot (ft)", "foot (ft)"), Ok(value));
        }
    }

    #[test]
    fn test_unknown_unit() {
        let table = length();
        let err = table.convert(1.0, "league", "meter (m)").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit("Length", "league"));

        let err = table.convert(1.0, "meter (m)", "meter").unwrap_err();
        assert_eq!(err, ConversionError::unknown_unit("Length", "meter"));
    }

    #[test]
    fn test_self_conversion_of_unknown_unit_fails() {
        let table = length();
        assert!(table.convert(1.0, "league", "league").is_err());
    }
}
