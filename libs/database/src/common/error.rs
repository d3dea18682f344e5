/// Unified database error type
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// No connection could be taken from the pool
    #[error("failed to acquire database connection: {0}")]
    Acquire(String),

    /// Initial pool connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Invalid connection settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
