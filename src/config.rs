use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "lightbnb.sqlite3";
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 4;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Database handle configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DbConfig {
    /// SQLite database file.
    pub database_path: PathBuf,

    /// Schema file applied by `init`. `None` uses the schema compiled into the crate.
    pub schema_path: Option<PathBuf>,

    /// Upper bound on connections kept open between calls.
    pub max_idle_connections: usize,

    /// Whether `LIKE` on city names distinguishes upper and lower case.
    pub case_sensitive_city_match: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            schema_path: None,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            case_sensitive_city_match: true,
        }
    }
}

impl DbConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            database_path: lookup("LIGHTBNB_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            schema_path: lookup("LIGHTBNB_SCHEMA_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            max_idle_connections: parse_var(&lookup, "LIGHTBNB_MAX_IDLE_CONNECTIONS", "4")?,
            case_sensitive_city_match: parse_var(&lookup, "LIGHTBNB_CASE_SENSITIVE_CITY", "true")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_idle_connections == 0 {
            return Err(ConfigError::Invalid {
                field: "LIGHTBNB_MAX_IDLE_CONNECTIONS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value.parse::<T>().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value: value.clone(),
        source: Box::new(e),
    })
}
