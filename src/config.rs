use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_SEED_EMAIL: &str = "test@example.com";
pub const DEFAULT_SEED_PASSWORD: &str = "password123";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Credentials of the sample user written by the `seed` binary.
#[derive(Clone)]
pub struct SeedConfig {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_SEED_EMAIL.into(),
            password: DEFAULT_SEED_PASSWORD.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), 10)?;
        let host = get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("APP_PORT", get("APP_PORT"), 8080)?;
        let seed = SeedConfig {
            email: get("SEED_EMAIL").unwrap_or_else(|| DEFAULT_SEED_EMAIL.into()),
            password: get("SEED_PASSWORD").unwrap_or_else(|| DEFAULT_SEED_PASSWORD.into()),
        };
        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            seed,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            name: "APP_HOST",
            value: self.host.clone(),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse() {
        Ok(v) => Ok(v),
        Err(_) => Err(ConfigError::Invalid { name, value }),
    }
}
