//! Server configuration
//!
//! Read once at startup from environment variables:
//! - `BIND_ADDR` (default 0.0.0.0)
//! - `PORT` (default 3000)
//! - `MAX_BATCH` (default 100), largest accepted `/api/predict/batch` request

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{AgriError, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BATCH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub max_batch: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| AgriError::Config {
                key: "BIND_ADDR",
                message: format!("'{}': {}", raw, e),
            })?,
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| AgriError::Config {
                key: "PORT",
                message: format!("'{}': {}", raw, e),
            })?,
            None => defaults.port,
        };

        let max_batch = match lookup("MAX_BATCH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| AgriError::Config {
                key: "MAX_BATCH",
                message: format!("'{}': {}", raw, e),
            })?,
            None => defaults.max_batch,
        };
        if max_batch == 0 {
            return Err(AgriError::Config {
                key: "MAX_BATCH",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            port,
            max_batch,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_BATCH", "10"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_batch, 10);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, AgriError::Config { key: "PORT", .. }));
    }

    #[test]
    fn test_zero_batch_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("MAX_BATCH", "0")])).unwrap_err();
        assert!(matches!(err, AgriError::Config { key: "MAX_BATCH", .. }));
    }
}
