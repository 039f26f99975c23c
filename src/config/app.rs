//! Process configuration from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

/// Storage backend used for all three domains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Fixture,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "fixture" => Ok(Backend::Fixture),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

/// Connection pool bounds. The pool never holds more than `max_connections`, open or idle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            max_connections: 25,
            max_lifetime: Duration::from_secs(5 * 60),
            idle_timeout: Duration::from_secs(5 * 60),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend: Backend,
    pub database_url: String,
    pub bind_addr: String,
    pub pool: PoolConfig,
    /// Limit applied to every repository call on the PostgreSQL backend.
    pub query_timeout: Duration,
}

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/breeders";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or empty keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let backend = match get("BREEDERS_BACKEND") {
            Some(v) => v.parse()?,
            None => Backend::Postgres,
        };
        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            max_lifetime: secs_or(get("DB_MAX_LIFETIME_SECS"), "DB_MAX_LIFETIME_SECS", defaults.max_lifetime)?,
            idle_timeout: secs_or(get("DB_IDLE_TIMEOUT_SECS"), "DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout)?,
            acquire_timeout: secs_or(get("DB_ACQUIRE_TIMEOUT_SECS"), "DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout)?,
        };
        if pool.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(AppConfig {
            backend,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            pool,
            query_timeout: secs_or(
                get("DB_QUERY_TIMEOUT_SECS"),
                "DB_QUERY_TIMEOUT_SECS",
                crate::repository::postgres::DEFAULT_QUERY_TIMEOUT,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
        None => Ok(default),
    }
}

fn secs_or(raw: Option<String>, key: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match raw {
        Some(v) => match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
            _ => Err(ConfigError::InvalidValue { key, value: v }),
        },
        None => Ok(default),
    }
}
