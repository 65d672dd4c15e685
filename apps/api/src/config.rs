use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::ranker::{DEFAULT_LIMIT, DEFAULT_MIN_SCORE};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Ranking `limit` when the request omits it.
    pub default_limit: usize,
    /// Ranking `min_score` when the request omits it.
    pub default_min_score: f64,
    /// Largest pool a single ranking request may submit.
    pub max_pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_limit: DEFAULT_LIMIT,
            default_min_score: DEFAULT_MIN_SCORE,
            max_pool_size: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_limit: env_or("MATCH_DEFAULT_LIMIT", defaults.default_limit)?,
            default_min_score: env_or("MATCH_DEFAULT_MIN_SCORE", defaults.default_min_score)?,
            max_pool_size: env_or("MATCH_MAX_POOL_SIZE", defaults.max_pool_size)?,
        };

        if !(0.0..=1.0).contains(&config.default_min_score) {
            anyhow::bail!(
                "MATCH_DEFAULT_MIN_SCORE must be within [0, 1], got {}",
                config.default_min_score
            );
        }

        Ok(config)
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
