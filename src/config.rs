use crate::error::ConfigError;
use crate::services::remote::{DEFAULT_BOOKS_API_URL, DEFAULT_TIMEOUT};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Sample,
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub source: SourceKind,
    pub books_api_url: String,
    pub books_api_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, applying defaults
    /// for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let source = match lookup("BOOKS_SOURCE") {
            Some(value) => match value.to_lowercase().as_str() {
                "static" | "sample" => SourceKind::Sample,
                "http" | "remote" => SourceKind::Http,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BOOKS_SOURCE",
                        value,
                        reason: "expected one of static, sample, http, remote".to_string(),
                    })
                }
            },
            None => SourceKind::Sample,
        };

        let books_api_url =
            lookup("BOOKS_API_URL").unwrap_or_else(|| DEFAULT_BOOKS_API_URL.to_string());

        let books_api_timeout = match lookup("BOOKS_API_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        key: "BOOKS_API_TIMEOUT_SECS",
                        value,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "BOOKS_API_TIMEOUT_SECS",
                        value,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            port,
            source,
            books_api_url,
            books_api_timeout,
        })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
