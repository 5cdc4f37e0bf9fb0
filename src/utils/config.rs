use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{self, DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS};

/// Process-wide token configuration: the two signing secrets and the two
/// token lifetimes. Built once at startup and injected into `TokenService`
/// rather than read from ambient globals, so tests can supply their own
/// secrets per instance.
#[derive(Clone)]
pub struct Config {
    access_token_secret: String,
    refresh_token_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl Config {
    /// Direct constructor, used for injection in tests. Does not validate the
    /// secrets: emptiness is checked again at the point of use, inside
    /// `TokenService`, so a misconfigured instance fails on issue/verify
    /// instead of signing with an empty key.
    pub fn new(
        access_token_secret: impl Into<String>,
        refresh_token_secret: impl Into<String>,
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
    ) -> Self {
        Self {
            access_token_secret: access_token_secret.into(),
            refresh_token_secret: refresh_token_secret.into(),
            access_ttl_seconds,
            refresh_ttl_seconds,
        }
    }

    /// Load configuration from the environment.
    ///
    /// Both secrets are required and must be non-empty. The TTLs are
    /// optional and fall back to 15 minutes (access) and 7 days (refresh).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let access_token_secret = req_var(consts::env::ACCESS_TOKEN_SECRET_ENV_VAR)?;
        let refresh_token_secret = req_var(consts::env::REFRESH_TOKEN_SECRET_ENV_VAR)?;

        let access_ttl_seconds = parse_i64_or(
            consts::env::ACCESS_TTL_SECONDS_ENV_VAR,
            DEFAULT_ACCESS_TTL_SECONDS,
        )?;
        let refresh_ttl_seconds = parse_i64_or(
            consts::env::REFRESH_TTL_SECONDS_ENV_VAR,
            DEFAULT_REFRESH_TTL_SECONDS,
        )?;

        Ok(Self {
            access_token_secret,
            refresh_token_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
        })
    }

    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }
    pub fn refresh_token_secret(&self) -> &str {
        &self.refresh_token_secret
    }
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("env var {0} must not be empty")]
    Empty(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    let value = env::var(key).map_err(|_| ConfigError::Missing(key))?;
    if value.is_empty() {
        return Err(ConfigError::Empty(key));
    }
    Ok(value)
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
        Err(_) => Ok(default),
    }
}
