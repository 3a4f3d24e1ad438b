use anyhow::Result;
use cinema_api::api::{create_routes, AppState};
use cinema_api::config::{run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::from_env()?;
    init_tracing(&app_config);

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let state = AppState::postgres(pool);
    if app_config.seed_database {
        DatabaseSeeder::new(state.clone()).seed_all().await?;
    }

    let app = create_routes(state);

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!(environment = %app_config.environment, "Cinema API listening on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `LOG_LEVEL` when both are set. Production output
/// has no ANSI colours.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!config.is_production())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
