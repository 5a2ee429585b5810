//! Application configuration
//!
//! Built from the process environment at startup; CLI flags override it.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::api::EnvStatus;
use crate::error::{Error, Result};
use crate::store::config::{DATABASE_NAME_ENV, DATABASE_URL_ENV};
use crate::store::StoreConfig;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 8000;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreConfig,
    /// Presence of the store variables, reported by diagnostics
    pub env: EnvStatus,
}

impl AppConfig {
    /// Create configuration from the process environment
    pub fn from_env(verbose: u8) -> Result<Self> {
        Self::from_lookup(verbose, |key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup
    pub fn from_lookup(verbose: u8, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup(DATABASE_URL_ENV);
        let database_name = lookup(DATABASE_NAME_ENV);

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                Error::Config(format!("{PORT_ENV} must be a port number, got '{raw}': {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        let store = StoreConfig::from_connection(database_url.as_deref(), database_name.as_deref())?;

        Ok(Self {
            verbose,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
            store,
            env: EnvStatus {
                database_url_set: database_url.is_some(),
                database_name_set: database_name.is_some(),
            },
        })
    }

    /// Override the listen port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the listen address
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,tower=debug",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            store: StoreConfig::default(),
            env: EnvStatus::default(),
        }
    }
}
