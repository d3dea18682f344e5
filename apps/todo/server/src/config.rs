use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use grpc_client::server::ServerConfig as GrpcServerConfig;

pub use core_config::Environment;

/// Process configuration, loaded once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database: PostgresConfig,
    pub grpc: GrpcServerConfig,
    pub http: ServerConfig,
    /// Apply embedded migrations before serving (`DB_RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
    /// Upper bound on draining in-flight requests (`SHUTDOWN_TIMEOUT_SECS`, default 30)
    pub shutdown_timeout: Duration,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let grpc = GrpcServerConfig::from_env()?; // GRPC_HOST=0.0.0.0, GRPC_PORT=9090
        let http = ServerConfig::from_env()?; // HTTP_HOST=0.0.0.0, HTTP_PORT=8080

        Ok(Self {
            environment,
            database,
            grpc,
            http,
            run_migrations: env_parse("DB_RUN_MIGRATIONS", true)?,
            shutdown_timeout: Duration::from_secs(env_parse("SHUTDOWN_TIMEOUT_SECS", 30u64)?),
        })
    }
}
