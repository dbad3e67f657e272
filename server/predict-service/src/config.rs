//! Service configuration, built once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
  #[error("config: {var}: {reason}")]
  Config { var: &'static str, reason: String },

  #[error(transparent)]
  Engine(#[from] heat_risk_engine::EngineError),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
  pub bind_addr: SocketAddr,
  /// Optional JSON file with engine thresholds/weights.
  pub risk_config_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5005),
      risk_config_path: None,
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self, ServiceError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// `BIND_ADDR` (default 127.0.0.1), `PORT` (default 5005), `HEAT_RISK_CONFIG` (optional path).
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
    let defaults = Self::default();

    let ip: IpAddr = match lookup("BIND_ADDR") {
      Some(s) => s.parse().map_err(|e| ServiceError::Config {
        var: "BIND_ADDR",
        reason: format!("invalid IP address: {}", e),
      })?,
      None => defaults.bind_addr.ip(),
    };
    let port: u16 = match lookup("PORT") {
      Some(s) => s.parse().map_err(|e| ServiceError::Config {
        var: "PORT",
        reason: format!("invalid port: {}", e),
      })?,
      None => defaults.bind_addr.port(),
    };

    Ok(Self {
      bind_addr: SocketAddr::new(ip, port),
      risk_config_path: lookup("HEAT_RISK_CONFIG")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from),
    })
  }
}
