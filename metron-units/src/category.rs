//! Conversion categories

use std::fmt;
use std::str::FromStr;

use metron_core::ConversionError;
use serde::{Deserialize, Serialize};

use crate::UnitTable;

/// The fixed set of categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mass,
    Length,
    Temperature,
    Time,
    Speed,
    Area,
    Volume,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Mass,
        Category::Length,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Area,
        Category::Volume,
    ];

    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Display name (e.g., "Mass")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Mass => "Mass",
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Area => "Area",
            Category::Volume => "Volume",
        }
    }

    /// Whether conversion needs an offset as well as a scale
    pub fn is_affine(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// How a category converts: through a factor table, or through the affine
/// temperature scales
#[derive(Debug, Clone, Copy)]
pub enum CategoryKind<'a> {
    Linear(&'a UnitTable),
    Affine,
}

impl<'a> CategoryKind<'a> {
    pub fn table(&self) -> Option<&'a UnitTable> {
        match *self {
            CategoryKind::Linear(table) => Some(table),
            CategoryKind::Affine => None,
        }
    }

    /// Short name for listings ("linear" or "affine")
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Linear(_) => "linear",
            CategoryKind::Affine => "affine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["Mass", "Length", "Temperature", "Time", "Speed", "Area", "Volume"]
        );
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Mass".parse::<Category>(), Ok(Category::Mass));
        assert_eq!("volume".parse::<Category>(), Ok(Category::Volume));
        assert_eq!(" Temperature ".parse::<Category>(), Ok(Category::Temperature));
    }

    #[test]
    fn test_parse_unknown_category() {
        assert_eq!(
            "Energy".parse::<Category>(),
            Err(ConversionError::UnknownCategory("Energy".to_string()))
        );
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for category in Category::all() {
            assert_eq!(category.name().parse::<Category>(), Ok(*category));
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = Category::all().iter().filter(|c| c.is_affine()).collect();
        assert_eq!(affine, [&Category::Temperature]);
    }
}
