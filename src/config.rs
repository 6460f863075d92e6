//! Configuration management for the contact list server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded through `dotenvy`, which never writes to stdout
//! (stdout carries MCP traffic).

use crate::error::{ConfigError, ConfigResult};
use crate::matching::DuplicatePolicy;
use crate::validation::{ValidationRules, DEFAULT_CITY_MIN_LENGTH, DEFAULT_NAME_MIN_LENGTH};
use std::env;
use std::time::Duration;

/// Configuration for the contact list server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum name length in characters (default: 2)
    pub name_min_length: usize,

    /// Minimum city length in characters (default: 3)
    pub city_min_length: usize,

    /// Duplicate detection policy (default: field)
    pub duplicate_policy: DuplicatePolicy,

    /// Seconds a validation error stays on the status line (default: 3)
    pub validation_error_ttl_secs: u64,

    /// Seconds a duplicate error stays on the status line (default: 4)
    pub duplicate_error_ttl_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `NAME_MIN_LENGTH`: Minimum name length (default: 2)
    /// - `CITY_MIN_LENGTH`: Minimum city length (default: 3)
    /// - `DUPLICATE_POLICY`: `field` or `record` (default: field)
    /// - `VALIDATION_ERROR_TTL_SECS`: Validation error display time (default: 3)
    /// - `DUPLICATE_ERROR_TTL_SECS`: Duplicate error display time (default: 4)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let name_min_length = Self::parse_env_min_length("NAME_MIN_LENGTH", defaults.name_min_length)?;
        let city_min_length = Self::parse_env_min_length("CITY_MIN_LENGTH", defaults.city_min_length)?;

        let duplicate_policy = match env::var("DUPLICATE_POLICY") {
            Ok(val) => val
                .parse::<DuplicatePolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "DUPLICATE_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.duplicate_policy,
        };

        let validation_error_ttl_secs =
            Self::parse_env_u64("VALIDATION_ERROR_TTL_SECS", defaults.validation_error_ttl_secs)?;
        let duplicate_error_ttl_secs =
            Self::parse_env_u64("DUPLICATE_ERROR_TTL_SECS", defaults.duplicate_error_ttl_secs)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            name_min_length,
            city_min_length,
            duplicate_policy,
            validation_error_ttl_secs,
            duplicate_error_ttl_secs,
            log_level,
        })
    }

    /// Length rules for the input validator.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            name_min_length: self.name_min_length,
            city_min_length: self.city_min_length,
        }
    }

    pub fn validation_error_ttl(&self) -> Duration {
        Duration::from_secs(self.validation_error_ttl_secs)
    }

    pub fn duplicate_error_ttl(&self) -> Duration {
        Duration::from_secs(self.duplicate_error_ttl_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse a minimum length; zero is rejected.
    fn parse_env_min_length(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => match val.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number greater than 0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            city_min_length: DEFAULT_CITY_MIN_LENGTH,
            duplicate_policy: DuplicatePolicy::FieldLevel,
            validation_error_ttl_secs: 3,
            duplicate_error_ttl_secs: 4,
            log_level: "error".to_string(),
        }
    }
}
