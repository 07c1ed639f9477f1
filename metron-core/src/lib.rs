//! Metron Core - Fundamental types
//!
//! This crate provides the core types used throughout Metron:
//! - `ConversionError`: Failure of a single conversion attempt
//! - `ErrorReport`: Structured errors for tool consumers
//! - `parse_number` / `format_number`: Input parsing and result display

mod error;
mod number;

pub use error::{codes, ConversionError, ErrorReport};
pub use number::{
    format_general, format_number, format_scientific, parse_number, DISPLAY_DIGITS,
    LARGE_MAGNITUDE, SMALL_MAGNITUDE,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{format_number, parse_number, ConversionError, ErrorReport};
}
