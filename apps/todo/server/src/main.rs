use axum_helpers::ShutdownCoordinator;
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_todos::{MIGRATOR, PgTodoRepository, TodoService};
use eyre::WrapErr;
use todo_server::{App, Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(config.environment);

    info!("Connecting to database...");
    let connector = database::postgres::connect(&config.database)
        .await
        .wrap_err("Failed to connect to database")?;
    database::postgres::check_health(&connector)
        .await
        .wrap_err("Database health check failed")?;

    if config.run_migrations {
        connector
            .run_migrations(&MIGRATOR, "todo")
            .await
            .wrap_err("Failed to run migrations")?;
    }

    let service = TodoService::new(PgTodoRepository::new(connector.clone()));
    let app = App::bind(&config, service).await?;

    let (coordinator, _rx) = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    let result = app.run(coordinator).await;

    connector.close().await;
    info!("Shutdown complete");
    result
}
