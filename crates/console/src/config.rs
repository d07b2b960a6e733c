//! Environment configuration, read once at start-up.

use invoicedesk_observability::LogFormat;

pub const SEED_VAR: &str = "INVOICEDESK_SEED";
pub const LOG_FORMAT_VAR: &str = "INVOICEDESK_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Start with the sample invoices instead of an empty store.
    pub seed: bool,
    pub log_format: LogFormat,
    /// `(variable, value)` pairs that were set but not understood.
    pub ignored: Vec<(String, String)>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed: true,
            log_format: LogFormat::default(),
            ignored: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys use defaults; unparsable ones use defaults
    /// and are recorded in `ignored`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            match parse_bool(&value) {
                Some(seed) => config.seed = seed,
                None => config.ignored.push((SEED_VAR.to_string(), value)),
            }
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            match LogFormat::parse(&value) {
                Some(format) => config.log_format = format,
                None => config.ignored.push((LOG_FORMAT_VAR.to_string(), value)),
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ConsoleConfig::default());
        assert!(config.seed);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_known_values() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (SEED_VAR, "false"),
            (LOG_FORMAT_VAR, "text"),
        ]));
        assert!(!config.seed);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn unknown_values_fall_back_and_are_recorded() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (SEED_VAR, "sometimes"),
            (LOG_FORMAT_VAR, "xml"),
        ]));
        assert!(config.seed);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.ignored,
            vec![
                (SEED_VAR.to_string(), "sometimes".to_string()),
                (LOG_FORMAT_VAR.to_string(), "xml".to_string()),
            ]
        );
    }
}
