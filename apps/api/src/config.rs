use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Seconds a stored result stays fetchable. `None` = forever.
    pub session_ttl_secs: Option<u64>,
    /// Cap on stored results. `None` = unbounded.
    pub session_max_entries: Option<usize>,
    pub session_sweep_secs: u64,
    /// Fixed seed for the card engine's random source; entropy when unset.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_ttl_secs: optional_env("SESSION_TTL_SECS")?,
            session_max_entries: optional_env("SESSION_MAX_ENTRIES")?,
            session_sweep_secs: optional_env("SESSION_SWEEP_SECS")?.unwrap_or(60),
            rng_seed: optional_env("RNG_SEED")?,
        })
    }
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_optional(key, std::env::var(key).ok())
}

/// Unset and blank both read as `None`.
fn parse_optional<T>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
    }
}
