//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::SocketAddr;

/// Configuration for the gRPC listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 9090)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding and encoding (default: 4MB)
    pub max_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
            enable_compression: true,
            max_message_size: 4 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_string()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "GRPC_HOST".to_string(),
                details: format!("'{}': {}", self.addr_string(), e),
            })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads:
    /// - `GRPC_HOST` (default: 0.0.0.0)
    /// - `GRPC_PORT` (default: 9090)
    /// - `GRPC_COMPRESSION` (default: true)
    /// - `GRPC_MAX_MESSAGE_SIZE` (default: 4194304)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or_default("GRPC_HOST", &defaults.host),
            port: env_parse("GRPC_PORT", defaults.port)?,
            enable_compression: env_parse("GRPC_COMPRESSION", defaults.enable_compression)?,
            max_message_size: env_parse("GRPC_MAX_MESSAGE_SIZE", defaults.max_message_size)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [(&str, Option<&str>); 4] = [
        ("GRPC_HOST", None),
        ("GRPC_PORT", None),
        ("GRPC_COMPRESSION", None),
        ("GRPC_MAX_MESSAGE_SIZE", None),
    ];

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr_string(), "0.0.0.0:9090");
        assert!(config.enable_compression);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(0)
            .with_compression(false);

        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:0".parse().unwrap());
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(VARS, || {
            assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());
        });
    }

    #[test]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("::1")),
                ("GRPC_PORT", Some("50051")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.port, 50051);
                assert!(!config.enable_compression);
                // IPv6 literals need brackets to form a socket address
                assert!(config.socket_addr().is_err());
            },
        );
    }

    #[test]
    fn test_from_env_invalid_port() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", None),
                ("GRPC_PORT", Some("")),
                ("GRPC_COMPRESSION", None),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("GRPC_PORT"));
            },
        );
    }
}
