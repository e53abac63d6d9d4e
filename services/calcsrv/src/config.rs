//! Service configuration
//!
//! Layered loading: built-in defaults, then `config/calcsrv.yaml`, then
//! `CALCSRV_*` environment variables (highest priority).

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{CalcSrvError, Result};

pub const DEFAULT_PORT: u16 = 8080;

/// Calculator service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file("config/calcsrv.yaml"))
            .merge(Env::prefixed("CALCSRV_"))
            .extract()
            .map_err(|e| CalcSrvError::Config(format!("Failed to load configuration: {e}")))
    }

    /// Load configuration from a specific YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("CALCSRV_"))
            .extract()
            .map_err(|e| {
                CalcSrvError::Config(format!(
                    "Failed to load configuration from {}: {e}",
                    path.display()
                ))
            })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CalcSrvError::Config(format!("Invalid bind address: {e}")))
    }
}
