//! Demonstration configuration
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Embedded defaults (`defaults.toml`)
//! 2. A user TOML file passed with `--config`, which may set any subset of keys
//! 3. Command-line flags
//!
//! # Example
//!
//! ```toml
//! [range]
//! start = 100
//!
//! [filter]
//! divisor = 3
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Embedded default settings
pub static DEFAULT_CONFIG: &str = include_str!("defaults.toml");

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `thunk_core=trace`
    pub level: String,
}

/// Input for the `list` demonstration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListConfig {
    pub items: Vec<i64>,
}

/// Input for the `range` demonstration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeConfig {
    pub start: i64,
    pub count: i64,
}

/// Input for the `filter` demonstration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    pub start: i64,
    pub count: i64,
    /// Keep elements divisible by this (must be non-zero)
    pub divisor: i64,
}

/// Complete demonstration configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub list: ListConfig,
    pub range: RangeConfig,
    pub filter: FilterConfig,
}

impl DemoConfig {
    /// Parse a complete configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load the embedded default configuration
    pub fn default_config() -> Result<Self, String> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Apply a partial TOML document on top of the defaults
    pub fn with_overrides(toml_str: &str) -> Result<Self, String> {
        let mut base = parse_table(DEFAULT_CONFIG)?;
        let overlay = parse_table(toml_str)?;
        merge_tables(&mut base, overlay);

        let config: DemoConfig = toml::Value::Table(base)
            .try_into()
            .map_err(|e| format!("Invalid config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a user configuration file and merge it over the defaults
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::with_overrides(&content)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), String> {
        validate_divisor(self.filter.divisor)?;
        EnvFilter::try_new(&self.logging.level)
            .map_err(|e| format!("Invalid logging level '{}': {}", self.logging.level, e))?;
        Ok(())
    }
}

/// A divisor of zero would make the filter reject every element forever
pub fn validate_divisor(divisor: i64) -> Result<(), String> {
    if divisor == 0 {
        return Err("filter divisor must be non-zero".to_string());
    }
    Ok(())
}

fn parse_table(toml_str: &str) -> Result<toml::Table, String> {
    toml_str
        .parse::<toml::Table>()
        .map_err(|e| format!("Failed to parse config: {}", e))
}

/// Merge `overlay` into `base`; nested tables merge key by key, anything
/// else is replaced outright
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
