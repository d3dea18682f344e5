use tracing::debug;

use super::Connector;
use crate::common::{DatabaseError, DatabaseResult};

/// Run `SELECT 1` on a pooled connection
pub async fn check_health(connector: &Connector) -> DatabaseResult<()> {
    debug!("Running PostgreSQL health check");

    let mut conn = connector.acquire().await?;
    sqlx::query("SELECT 1")
        .execute(conn.connection())
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e)))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
