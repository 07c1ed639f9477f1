//! Server configuration from the environment

use std::env;

const DEFAULT_LOG_FILTER: &str = "info";

/// Settings read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing` filter directive (RUST_LOG)
    pub log_filter: String,
    /// Notation used when a convert call omits `scientific` (METRON_SCIENTIFIC)
    pub scientific_default: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            scientific_default: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_filter = lookup("RUST_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let scientific_default = lookup("METRON_SCIENTIFIC")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.scientific_default);

        ServerConfig {
            log_filter,
            scientific_default,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().log_filter, "info");
    }

    #[test]
    fn test_log_filter() {
        let config = config_from(&[("RUST_LOG", "metron_units=debug")]);
        assert_eq!(config.log_filter, "metron_units=debug");

        let config = config_from(&[("RUST_LOG", "  ")]);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_scientific_flag() {
        assert!(config_from(&[("METRON_SCIENTIFIC", "1")]).scientific_default);
        assert!(config_from(&[("METRON_SCIENTIFIC", "Yes")]).scientific_default);
        assert!(!config_from(&[("METRON_SCIENTIFIC", "off")]).scientific_default);
        assert!(!config_from(&[("METRON_SCIENTIFIC", "maybe")]).scientific_default);
    }
}
