use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh person store built from `cfg`.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::from_config(&cfg.store);
    routes::build_router(state, build_cors())
}

/// Resolve host/port into a socket address.
pub fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: build the app, bind and run the HTTP server.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg);
    let addr = load_bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, seeded = cfg.store.seed_sample, "Listening on port {}...", addr.port());
    serve(listener, app, shutdown).await
}
