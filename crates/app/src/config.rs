//! Process configuration, read from the environment.

use stockroom_observability::LogFormat;

pub const SEED_VAR: &str = "STOCKROOM_SEED";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Load the sample parts and products at startup.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: true,
            log_format: LogFormat::Json,
        }
    }
}

/// A variable that was set but could not be used; the default was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub var: &'static str,
    pub value: String,
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<ConfigWarning>) {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unusable values fall back to defaults
    /// and are reported so they can be logged once tracing is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigWarning>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(SEED_VAR) {
            match parse_bool(&raw) {
                Some(seed) => config.seed = seed,
                None => warnings.push(ConfigWarning {
                    var: SEED_VAR,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(_) => warnings.push(ConfigWarning {
                    var: LOG_FORMAT_VAR,
                    value: raw,
                }),
            }
        }

        (config, warnings)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
