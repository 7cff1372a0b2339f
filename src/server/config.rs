//! Server settings read from the process environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Variable holding the listen port, with or without a leading `:`.
pub const PORT_ENV: &str = "MARS_ROVER_SERVER_PORT";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port {0:?} in MARS_ROVER_SERVER_PORT")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address; always all interfaces.
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(PORT_ENV).unwrap_or_default();
        let raw = raw.trim();
        let port = match raw.strip_prefix(':').unwrap_or(raw) {
            "" => DEFAULT_PORT,
            p => p
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };

        Ok(Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}
