//! Runtime configuration read from the environment.
//!
//! | Variable               | Default   |
//! |------------------------|-----------|
//! | `CATALOG_HOST`         | `0.0.0.0` |
//! | `CATALOG_PORT`         | `3000`    |
//! | `CATALOG_STORE_BUFFER` | `32`      |
//!
//! Log levels are controlled separately through `RUST_LOG`.

use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name} value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Capacity of the store task's request channel.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let buffer_size = parse(&lookup, "CATALOG_STORE_BUFFER", 32usize)?;
        if buffer_size == 0 {
            return Err(ConfigError::Invalid {
                name: "CATALOG_STORE_BUFFER",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            server: ServerConfig {
                host: lookup("CATALOG_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse(&lookup, "CATALOG_PORT", 3000u16)?,
            },
            store: StoreConfig { buffer_size },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CATALOG_HOST", "127.0.0.1"),
            ("CATALOG_PORT", "8080"),
            ("CATALOG_STORE_BUFFER", "4"),
        ])
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert_eq!(config.store.buffer_size, 4);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("CATALOG_PORT", "http")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "CATALOG_PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn test_zero_buffer_rejected() {
        assert!(config_from(&[("CATALOG_STORE_BUFFER", "0")]).is_err());
    }
}
