//! Conversion errors
//!
//! Errors never crash the engine. Each conversion attempt either yields a
//! result or one of these values, and the engine stays usable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
}

/// Error type for a single conversion attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("could not convert string to number: '{0}'")]
    Parse(String),

    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("unknown temperature unit: '{0}'")]
    UnknownTemperatureUnit(String),

    #[error("unknown category: '{0}'")]
    UnknownCategory(String),
}

impl ConversionError {
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        ConversionError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::Parse(_) => codes::PARSE_ERROR,
            ConversionError::UnknownUnit { .. } | ConversionError::UnknownTemperatureUnit(_) => {
                codes::UNKNOWN_UNIT
            }
            ConversionError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
        }
    }
}

/// Structured error for tool consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

impl From<ConversionError> for ErrorReport {
    fn from(err: ConversionError) -> Self {
        let report = Self::new(err.code(), err.to_string());
        match err {
            ConversionError::Parse(_) => {
                report.with_suggestion("Enter a plain number such as 12.5 or 1e3")
            }
            ConversionError::UnknownUnit { category, .. } => {
                report.with_suggestion(format!("Use list_units(\"{}\") to see valid units", category))
            }
            ConversionError::UnknownTemperatureUnit(_) => {
                report.with_suggestion("Use celsius, fahrenheit or kelvin")
            }
            ConversionError::UnknownCategory(_) => {
                report.with_suggestion("Use list_categories() to see valid categories")
            }
        }
    }
}
