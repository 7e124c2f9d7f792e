//! Configuration management for the squared CLI.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Command-line flags override whatever is loaded here.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `5^2 = 25`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Must be plain or json, got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the squared CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,

    /// Output format (default: plain)
    pub output: OutputFormat,

    /// Reject NaN and infinite operands (default: false)
    pub strict: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SQUARED_LOG_LEVEL`: Logging level (default: "error")
    /// - `SQUARED_OUTPUT`: `plain` or `json` (default: plain)
    /// - `SQUARED_STRICT`: `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let log_level = env::var("SQUARED_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SQUARED_LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let output = match env::var("SQUARED_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SQUARED_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let strict = Self::parse_env_bool("SQUARED_STRICT", false)?;

        Ok(Config {
            log_level,
            output,
            strict,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            output: OutputFormat::Plain,
            strict: false,
        }
    }
}
