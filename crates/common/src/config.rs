use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:journal.db";
const DEFAULT_POLL_SECS: u64 = 5;
const DEFAULT_BATCH_LIMIT: u32 = 100;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the journal binary, read from the process environment
/// (after `.env` has been loaded by the caller).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    /// Relay is disabled when no token is configured.
    pub telegram_bot_token: Option<String>,
    pub poll_interval: Duration,
    pub batch_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN").filter(|v| !v.trim().is_empty());

        let poll_secs = parse_var(&lookup, "PARSE_POLL_SECS", DEFAULT_POLL_SECS)?;
        if poll_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "PARSE_POLL_SECS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let batch_limit = parse_var(&lookup, "PARSE_BATCH_LIMIT", DEFAULT_BATCH_LIMIT)?;

        Ok(Self {
            database_url,
            telegram_bot_token,
            poll_interval: Duration::from_secs(poll_secs),
            batch_limit,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
