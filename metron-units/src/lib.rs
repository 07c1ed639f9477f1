//! Metron Units - Unit registry and conversion engine
//!
//! Converts values between units of one category and renders the result.
//!
//! Categories:
//! - Mass (kg, g, mg, lb, oz)
//! - Length (km, m, cm, mm, in, ft, mi)
//! - Temperature (°C, °F, K)
//! - Time (s, min, h, d)
//! - Speed (m/s, km/h, mph)
//! - Area (m², cm², ft²)
//! - Volume (L, mL, m³, US gal)
//!
//! Temperature is affine and pivots through Celsius; every other category
//! scales through its table's base unit.

mod category;
mod unit;
mod units;
mod temperature;
mod convert;

pub use category::{Category, CategoryKind};
pub use unit::{convert_linear, Unit, UnitTable};
pub use units::{UnitRegistry, UNITS};
pub use temperature::{convert_temperature, TemperatureScale, KELVIN_OFFSET, TEMPERATURE_UNITS};
pub use convert::{
    convert_request, convert_value, perform_conversion, render_outcome, ConversionRequest,
    ConversionResult, ERROR_PREFIX,
};

pub use metron_core::{format_number, parse_number, ConversionError, ErrorReport};
