use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Service configuration, read from the environment (and `.env` via
/// `dotenvy` in `main`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_DB` (required) and
    /// `POSTGRES_HOST`, `POSTGRES_PORT` (default `localhost:5432`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => {
                let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    require("POSTGRES_USER")?,
                    require("POSTGRES_PASSWORD")?,
                    lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string()),
                    lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string()),
                    require("POSTGRES_DB")?,
                )
            }
        };

        Ok(Config {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number(&lookup, "PORT", 8080)?,
            pool_size: parse_number(&lookup, "DB_POOL_SIZE", 10)?,
        })
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
