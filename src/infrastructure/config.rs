//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables
//! (with `.env` support); missing or invalid values produce explicit
//! errors rather than panics.

use std::env;
use std::num::ParseIntError;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// # Fields
///
/// - `database_url`: SQLite connection string
/// - `app_host`: Host address for the HTTP server
/// - `app_port`: Port number for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database connection URL.
    pub database_url: String,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: SQLite connection string (required)
    /// - `APP_HOST`: Server host (optional, default: "0.0.0.0")
    /// - `APP_PORT`: Server port (optional, default: 8081)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if a required variable is not
    /// set, and `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let database_url = get_required_env("DATABASE_URL")?;
        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 8081)?;

        Ok(Self {
            database_url,
            app_host,
            app_port,
        })
    }

    /// Creates a new `AppConfig` with the given values.
    ///
    /// Useful for tests or when configuration is provided programmatically.
    #[must_use]
    pub const fn new(database_url: String, app_host: String, app_port: u16) -> Self {
        Self {
            database_url,
            app_host,
            app_port,
        }
    }
}

impl Default for AppConfig {
    /// A local single-file database on the default host and port.
    fn default() -> Self {
        Self {
            database_url: "sqlite:cookbook.db?mode=rwc".to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 8081,
        }
    }
}

/// Gets a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
