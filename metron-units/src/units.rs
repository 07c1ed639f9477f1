//! Unit definitions - the fixed tables for every category

use std::sync::LazyLock;

use metron_core::ConversionError;

use crate::temperature::TEMPERATURE_UNITS;
use crate::{Category, CategoryKind, UnitTable};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all linear tables; temperature is handled by the affine scales
pub struct UnitRegistry {
    mass: UnitTable,
    length: UnitTable,
    time: UnitTable,
    speed: UnitTable,
    area: UnitTable,
    volume: UnitTable,
}

impl UnitRegistry {
    pub fn new() -> Self {
        UnitRegistry {
            mass: mass_units(),
            length: length_units(),
            time: time_units(),
            speed: speed_units(),
            area: area_units(),
            volume: volume_units(),
        }
    }

    /// Resolve a category to its conversion kind
    pub fn lookup(&self, category: Category) -> CategoryKind<'_> {
        match category {
            Category::Mass => CategoryKind::Linear(&self.mass),
            Category::Length => CategoryKind::Linear(&self.length),
            Category::Temperature => CategoryKind::Affine,
            Category::Time => CategoryKind::Linear(&self.time),
            Category::Speed => CategoryKind::Linear(&self.speed),
            Category::Area => CategoryKind::Linear(&self.area),
            Category::Volume => CategoryKind::Linear(&self.volume),
        }
    }

    /// Resolve a category by display name
    pub fn lookup_name(&self, name: &str) -> Result<(Category, CategoryKind<'_>), ConversionError> {
        let category: Category = name.parse()?;
        Ok((category, self.lookup(category)))
    }

    pub fn table(&self, category: Category) -> Option<&UnitTable> {
        self.lookup(category).table()
    }

    /// Selectable unit labels for a category, in display order
    pub fn units(&self, category: Category) -> Vec<&str> {
        match self.lookup(category) {
            CategoryKind::Linear(table) => table.labels(),
            CategoryKind::Affine => TEMPERATURE_UNITS.to_vec(),
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Base unit: gram
fn mass_units() -> UnitTable {
    UnitTable::new(Category::Mass)
        .with_unit("kilogram (kg)", 1000.0)
        .with_unit("gram (g)", 1.0)
        .with_unit("milligram (mg)", 0.001)
        .with_unit("pound (lb)", 453.59237)
        .with_unit("ounce (oz)", 28.349523125)
}

// Base unit: meter
fn length_units() -> UnitTable {
    UnitTable::new(Category::Length)
        .with_unit("kilometer (km)", 1000.0)
        .with_unit("meter (m)", 1.0)
        .with_unit("centimeter (cm)", 0.01)
        .with_unit("millimeter (mm)", 0.001)
        .with_unit("inch (in)", 0.0254)
        .with_unit("foot (ft)", 0.3048)
        .with_unit("mile (mi)", 1609.344)
}

// Base unit: second
fn time_units() -> UnitTable {
    UnitTable::new(Category::Time)
        .with_unit("second (s)", 1.0)
        .with_unit("minute (min)", 60.0)
        .with_unit("hour (h)", 3600.0)
        .with_unit("day (d)", 86400.0)
}

// Base unit: m/s
fn speed_units() -> UnitTable {
    UnitTable::new(Category::Speed)
        .with_unit("m/s", 1.0)
        .with_unit("km/h", 1000.0 / 3600.0)
        .with_unit("mph", 1609.344 / 3600.0)
}

// Base unit: m²
fn area_units() -> UnitTable {
    UnitTable::new(Category::Area)
        .with_unit("m²", 1.0)
        .with_unit("cm²", 0.0001)
        .with_unit("ft²", 0.09290304)
}

// Base unit: liter
fn volume_units() -> UnitTable {
    UnitTable::new(Category::Volume)
        .with_unit("liter (L)", 1.0)
        .with_unit("milliliter (mL)", 0.001)
        .with_unit("cubic meter (m³)", 1000.0)
        .with_unit("gallon (US)", 3.785411784)
}
