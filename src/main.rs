use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{info, warn};

use ems::logging::{init_tracing, shutdown_tracer};
use ems::metrics::{init_metrics, metrics_router};
use ems::router::init_router;
use ems::state::init_app_state;
use ems_config::ServerConfig;
use ems_db::run_migrations;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env()?;
    let state = init_app_state().await?;
    run_migrations(&state.db).await?;

    let mut app = init_router(state);
    if let Some(handle) = init_metrics()? {
        app = app.merge(metrics_router(handle));
    }

    let addr = server_config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
