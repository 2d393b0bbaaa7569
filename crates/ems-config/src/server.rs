use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::env_lookup;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads `HOST` (default `0.0.0.0`) and `PORT` (default 3000).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env_lookup)
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match get("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?,
            None => 3000,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(|_| None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_vars(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }
}
