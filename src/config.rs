//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default.

use crate::book::InsertPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable holding the listing page size.
pub const PAGE_SIZE_VAR: &str = "CONTACTS_PAGE_SIZE";

/// Environment variable holding the duplicate-name insert policy.
pub const INSERT_POLICY_VAR: &str = "CONTACTS_INSERT_POLICY";

/// Environment variable holding the fallback log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records per page for paginated listing (default: 10)
    pub page_size: usize,

    /// What `add_record` does when the name is already taken (default: upsert)
    pub insert_policy: InsertPolicy,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_PAGE_SIZE`: records per page, at least 1 (default: 10)
    /// - `CONTACTS_INSERT_POLICY`: `upsert` or `insert_or_fail` (default: `upsert`)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let page_size = Self::parse_env_usize(PAGE_SIZE_VAR, defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: PAGE_SIZE_VAR.to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let insert_policy = match env::var(INSERT_POLICY_VAR) {
            Ok(val) => val.parse::<InsertPolicy>().map_err(|reason| {
                ConfigError::InvalidValue {
                    var: INSERT_POLICY_VAR.to_string(),
                    reason,
                }
            })?,
            Err(_) => defaults.insert_policy,
        };

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or(defaults.log_level);

        Ok(Config {
            page_size,
            insert_policy,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: 10,
            insert_policy: InsertPolicy::Upsert,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.insert_policy, InsertPolicy::Upsert);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(PAGE_SIZE_VAR, "25");
        guard.set(INSERT_POLICY_VAR, "insert_or_fail");
        guard.set(LOG_LEVEL_VAR, "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.insert_policy, InsertPolicy::InsertOrFail);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set(PAGE_SIZE_VAR, "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, PAGE_SIZE_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_page_size() {
        let mut guard = EnvGuard::new();
        guard.set(PAGE_SIZE_VAR, "many");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, reason }) = result {
            assert_eq!(var, PAGE_SIZE_VAR);
            assert!(reason.contains("many"));
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_insert_policy() {
        let mut guard = EnvGuard::new();
        guard.set(INSERT_POLICY_VAR, "sometimes");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, INSERT_POLICY_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_CONTACTS_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_CONTACTS_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("TEST_CONTACTS_MISSING", 10).unwrap(), 10);
    }
}
