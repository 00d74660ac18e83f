//! Server settings from `SERVER_*` environment variables.

use config::{Config, Environment};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use ctxlog::LogError;

/// Bind address of the demo server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    /// Reads `SERVER_HOST` and `SERVER_PORT`.
    pub fn from_env() -> Result<Self, LogError> {
        Self::load(Environment::with_prefix("SERVER").try_parsing(true))
    }

    fn load(source: Environment) -> Result<Self, LogError> {
        Config::builder()
            .add_source(source)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| LogError::config(e.to_string()))
    }

    /// Socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, LogError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| LogError::config(format!("invalid SERVER_HOST '{}'", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerSettings, LogError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerSettings::load(
            Environment::with_prefix("SERVER")
                .try_parsing(true)
                .source(Some(vars.into_iter().collect())),
        )
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[]).unwrap();
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let settings = load(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "9090")]).unwrap();
        assert_eq!(settings.addr().unwrap().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = load(&[("SERVER_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, LogError::Config { .. }));
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let settings = ServerSettings {
            host: "not an ip".to_string(),
            port: 1,
        };
        assert!(settings.addr().is_err());
    }
}
