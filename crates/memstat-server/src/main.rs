//! memstat server
//!
//! - Update endpoint: POST /update/<type>/<name>/<value>
//! - Liveness: GET /healthz
//! - Config: $MEMSTAT_CONFIG or ./memstat.yaml (optional)

use tracing_subscriber::{fmt, EnvFilter};

use memstat_core::error::{MemstatError, Result};
use memstat_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let state = app_state::AppState::new(config::load()?);
    let listen = state.cfg().server.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, "memstat-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MemstatError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MemstatError::Internal(format!("server failed: {e}")))
}
