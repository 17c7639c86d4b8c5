//! Listener, logging and CORS settings for the gateway process

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Where the gateway listens and how it reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address; must be an IP literal
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment mode; production switches logs to JSON
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dashboard origins allowed to open `/ws` (comma-separated).
    /// Unset means any origin.
    pub cors_origins: Option<String>,
}

/// Deployment mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Production log collectors ingest one JSON object per line.
    pub fn json_logs(self) -> bool {
        self == Environment::Production
    }
}

impl ServerConfig {
    /// Parsed listener address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured origins with blanks removed; empty allows any origin.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.bind_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info,alarm_gateway=debug,tower_http=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:3001");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.allowed_origins().is_empty());
    }

    #[test]
    fn hostname_is_rejected_as_bind_address() {
        let config = ServerConfig {
            host: "gateway.local".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidHost("gateway.local".to_string()))
        );
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPort));
    }

    #[test]
    fn only_production_logs_json() {
        assert!(!Environment::Development.json_logs());
        assert!(Environment::Production.json_logs());
    }

    #[test]
    fn allowed_origins_skip_blanks() {
        let config = ServerConfig {
            cors_origins: Some(" http://localhost:5173 ,, https://ops.example.org,".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.allowed_origins(),
            vec!["http://localhost:5173", "https://ops.example.org"]
        );
    }
}
