mod config;
mod errors;
mod mapping;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::{run_sweeper, EvictionPolicy, InMemorySessionStore, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting card API v{}", env!("CARGO_PKG_VERSION"));

    let policy = EvictionPolicy::from_limits(config.session_ttl_secs, config.session_max_entries);
    if policy.is_unbounded() {
        warn!(
            "Session store has no TTL and no capacity limit; stored results are kept until restart"
        );
    } else {
        info!("Session eviction policy: {policy:?}");
    }
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new(policy));

    if policy.ttl.is_some() {
        let every = Duration::from_secs(config.session_sweep_secs.max(1));
        tokio::spawn(run_sweeper(sessions.clone(), every));
        info!("Session sweeper running every {}s", every.as_secs());
    }

    if config.rng_seed.is_some() {
        info!("Card engine random source is seeded; results are reproducible");
    }

    let state = AppState::new(config.clone(), sessions);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
