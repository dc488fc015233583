use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};
use waduk::logging::init_tracing;
use waduk::router::{AppRoutes, init_router};
use waduk::state::init_app_state;
use waduk_config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let settings = Settings::from_env();
    let _log_guard = init_tracing(&settings.logger)?;

    info!(
        app = %settings.app.name,
        env = %settings.app.env,
        debug = settings.app.debug,
        timezone = %settings.app.timezone,
        "Starting"
    );

    let addr = settings.app.bind_addr.clone();
    let state = match init_app_state(settings).await {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Database unavailable");
            return Err(err.into());
        }
    };

    let app = init_router(state, AppRoutes::new());

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
