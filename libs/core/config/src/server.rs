use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::{Ipv4Addr, SocketAddr};

/// Listener configuration for the HTTP gateway
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the configured host and port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "HTTP_HOST".to_string(),
                details: format!("'{}': {}", self.address(), e),
            })
    }
}

impl FromEnv for ServerConfig {
    /// - HTTP_HOST: defaults to 0.0.0.0
    /// - HTTP_PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HTTP_HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("HTTP_PORT", 8080u16)?;
        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars([("HTTP_HOST", None::<&str>), ("HTTP_PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [("HTTP_HOST", Some("127.0.0.1")), ("HTTP_PORT", Some("3000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:3000".parse().unwrap());
            },
        );
    }

    #[test]
    fn test_server_config_rejects_empty_port() {
        temp_env::with_var("HTTP_PORT", Some(""), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("HTTP_PORT"));
        });
    }

    #[test]
    fn test_server_config_rejects_out_of_range_port() {
        temp_env::with_var("HTTP_PORT", Some("99999"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = ServerConfig::new("not a host", 80);
        assert!(config.socket_addr().is_err());
    }
}
