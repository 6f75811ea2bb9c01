// Process configuration read from the environment.
//
// Unset variables fall back to defaults. A set but unparsable value is an
// error so a typo never silently turns into a default.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::modules::event_registrations::use_cases::register_participant::retry_policy::{
    DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS, RetryPolicy,
};
use crate::shared::infrastructure::postgres::PostgresConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    /// `None` runs the service on the in-memory store.
    pub postgres: Option<PostgresConfig>,
    pub retry_policy: RetryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        };

        let postgres = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(PostgresConfig {
                url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
                connect_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DATABASE_CONNECT_TIMEOUT_SECS",
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                )?),
            }),
            None => None,
        };

        let retry_policy = RetryPolicy {
            max_attempts: parse_or(&lookup, "REGISTER_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            backoff: Duration::from_millis(parse_or(
                &lookup,
                "REGISTER_RETRY_BACKOFF_MS",
                u64::try_from(DEFAULT_BACKOFF.as_millis()).unwrap_or(10),
            )?),
        };

        Ok(Self {
            server,
            postgres,
            retry_policy,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
