use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh in-memory catalogue.
pub fn build_app() -> Router {
    routes::build_router(AppState::in_memory(), build_cors())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: bind the configured address and serve until Ctrl+C.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let bind = config.server.bind_addr();
    let listener = TcpListener::bind(&bind).await?;
    let addr = listener.local_addr()?;
    info!(%addr, event = "listening", "product store listening");

    serve(listener, build_app(), shutdown_signal()).await
}
