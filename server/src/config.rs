//! Host configuration parsed from environment variables.

use client::config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_MIN_SECRET_LEN};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid MIN_SECRET_LEN: {0} (expected an integer >= 1)")]
    InvalidMinSecretLen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Settings forwarded to the browser through the SSR shell.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTITY_API_BASE`: identity provider API root, default `/identity/v1`
    /// - `MIN_SECRET_LEN`: minimum password length, default 8
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base = lookup("IDENTITY_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let min_secret_len = match lookup("MIN_SECRET_LEN") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(ConfigError::InvalidMinSecretLen(raw)),
            },
            None => DEFAULT_MIN_SECRET_LEN,
        };

        Ok(Self { port, client: ClientConfig { api_base, min_secret_len } })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
