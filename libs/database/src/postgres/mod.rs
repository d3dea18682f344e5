//! PostgreSQL pool, connection guard and helpers

mod config;
mod connector;
mod health;

pub use config::{ConnectionSource, PostgresConfig};
pub use connector::{connect, Connector, PooledConnection};
pub use health::check_health;

// Re-export the sqlx types callers need alongside a connector
pub use sqlx::migrate::Migrator;
pub use sqlx::{PgConnection, PgPool};
