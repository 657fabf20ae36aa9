use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::routes;
use crate::state::ServerState;

/// CORS policy from config; `"*"` allows every origin.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cfg.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .filter(|o| !o.trim().is_empty())
        .map(|o| HeaderValue::from_str(o.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Router with a fresh in-memory store.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(ServerState::in_memory(), cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "notes server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("notes server stopped");
    Ok(())
}
