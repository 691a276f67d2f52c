use atelier_core::project::is_valid_category;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
///
/// Every knob has a default; the service starts with an empty environment.
/// There are no required credentials here: the agent runtime that holds
/// model API keys lives outside this repository.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Endpoint of the remote system of record that projects are forwarded
    /// to.
    pub forward_url: String,
    /// Whole-request timeout for each forwarding attempt.
    pub forward_timeout: Duration,
    /// Category applied when an agent tool call omits `category_id`.
    pub default_category_id: u32,
    pub log_level: Level,
}

const DEFAULT_FORWARD_URL: &str = "https://asterion.casa/api/v1/projects";

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let forward_url =
            std::env::var("FORWARD_URL").unwrap_or_else(|_| DEFAULT_FORWARD_URL.to_string());

        let timeout_str =
            std::env::var("FORWARD_TIMEOUT_SECS").unwrap_or_else(|_| "5".to_string());
        let timeout_secs = timeout_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("FORWARD_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let forward_timeout = Duration::from_secs(timeout_secs);

        let category_str = std::env::var("DEFAULT_CATEGORY_ID").unwrap_or_else(|_| "5".to_string());
        let default_category_id = category_str.parse::<u32>().map_err(|e| {
            ConfigError::InvalidValue("DEFAULT_CATEGORY_ID".to_string(), e.to_string())
        })?;
        if !is_valid_category(default_category_id) {
            return Err(ConfigError::InvalidValue(
                "DEFAULT_CATEGORY_ID".to_string(),
                format!("'{}' is not a valid category ID", default_category_id),
            ));
        }

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            forward_url,
            forward_timeout,
            default_category_id,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("FORWARD_URL");
            env::remove_var("FORWARD_TIMEOUT_SECS");
            env::remove_var("DEFAULT_CATEGORY_ID");
            env::remove_var("RUST_LOG");
        }
    }

    #[test]
    fn test_config_error_display() {
        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.forward_url, DEFAULT_FORWARD_URL);
        assert_eq!(config.forward_timeout, Duration::from_secs(5));
        assert_eq!(config.default_category_id, 5);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_config_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("FORWARD_URL", "http://localhost:9000/projects");
            env::set_var("FORWARD_TIMEOUT_SECS", "2");
            env::set_var("DEFAULT_CATEGORY_ID", "10");
            env::set_var("RUST_LOG", "debug");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.forward_url, "http://localhost:9000/projects");
        assert_eq!(config.forward_timeout, Duration::from_secs(2));
        assert_eq!(config.default_category_id, 10);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "BIND_ADDRESS"),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout() {
        clear_env_vars();
        unsafe {
            env::set_var("FORWARD_TIMEOUT_SECS", "soon");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "FORWARD_TIMEOUT_SECS"),
        }
    }

    #[test]
    #[serial]
    fn test_config_default_category_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("DEFAULT_CATEGORY_ID", "11");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, msg) => {
                assert_eq!(var, "DEFAULT_CATEGORY_ID");
                assert!(msg.contains("11"));
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue(var, _) => assert_eq!(var, "RUST_LOG"),
        }
    }
}
