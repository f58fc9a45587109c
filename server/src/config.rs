//! Runtime configuration loaded from environment variables.
//!
//! DESIGN
//! ======
//! `Config::from_env` reads the process environment (after `dotenvy` has
//! merged any `.env` file). Parsing goes through `from_lookup` so tests can
//! feed a map instead of mutating process-global env vars.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_HOURS: i32 = 24 * 30;
const DEFAULT_LOGIN_RATE_LIMIT: usize = 5;
const DEFAULT_LOGIN_RATE_WINDOW_SECS: u64 = 300;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub session_ttl_hours: i32,
    pub cookie_secure: bool,
    pub login_rate_limit: usize,
    pub login_rate_window: Duration,
}

/// Parse `1/true/yes/on` and `0/false/no/off`, case-insensitively.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or any variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or any value fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cookie_secure = match lookup("COOKIE_SECURE") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
        };

        let session_ttl_hours = parse_or(&lookup, "SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        if session_ttl_hours <= 0 {
            return Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: session_ttl_hours.to_string() });
        }

        let login_rate_window_secs = parse_or(&lookup, "LOGIN_RATE_WINDOW_SECS", DEFAULT_LOGIN_RATE_WINDOW_SECS)?;

        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            session_ttl_hours,
            cookie_secure,
            login_rate_limit: parse_or(&lookup, "LOGIN_RATE_LIMIT", DEFAULT_LOGIN_RATE_LIMIT)?,
            login_rate_window: Duration::from_secs(login_rate_window_secs),
        })
    }

    /// Log the effective configuration, without the database credentials.
    pub fn log_startup(&self) {
        tracing::info!(
            port = self.port,
            db_max_connections = self.db_max_connections,
            session_ttl_hours = self.session_ttl_hours,
            cookie_secure = self.cookie_secure,
            login_rate_limit = self.login_rate_limit,
            login_rate_window_secs = self.login_rate_window.as_secs(),
            "configuration loaded"
        );
    }
}
