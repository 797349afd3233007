//! Server settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::Level;

use crate::error::{PayrollError, PayrollResult};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings for the HTTP server binary.
///
/// | Variable | Default |
/// |---|---|
/// | `PAYROLL_BIND_ADDR` | `0.0.0.0:3000` |
/// | `PAYROLL_CONFIG_DIR` | unset (built-in schedule) |
/// | `PAYROLL_LOG_LEVEL` | `info` |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Statutory configuration directory, if any.
    pub config_dir: Option<PathBuf>,
    /// Maximum log level.
    pub log_level: Level,
}

impl ServerSettings {
    /// Reads settings from the process environment, loading `.env` first.
    pub fn from_env() -> PayrollResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use prominent_payroll::config::ServerSettings;
    ///
    /// let settings = ServerSettings::from_lookup(|_| None).unwrap();
    /// assert_eq!(settings.bind_addr.port(), 3000);
    /// assert!(settings.config_dir.is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> PayrollResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("PAYROLL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| PayrollError::InvalidConfig {
                message: format!("PAYROLL_BIND_ADDR '{bind_raw}': {e}"),
            })?;

        let config_dir = lookup("PAYROLL_CONFIG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let level_raw = lookup("PAYROLL_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_level = level_raw
            .parse::<Level>()
            .map_err(|_| PayrollError::InvalidConfig {
                message: format!("PAYROLL_LOG_LEVEL '{level_raw}' is not a log level"),
            })?;

        Ok(Self {
            bind_addr,
            config_dir,
            log_level,
        })
    }
}
