use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod ids;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::SourceStore;

/// Shared application state — cheap to clone (the catalog sits behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<SourceStore>>,
}

impl AppState {
    pub fn new(store: SourceStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,power_sources=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = SourceStore::seeded();
    info!(
        sources = store.sources().len(),
        powers = store.sources().iter().map(|s| s.powers.len()).sum::<usize>(),
        "Catalog seeded"
    );

    let state = AppState::new(store);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("Server started on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/balance", get(handlers::balance::get_balance))

        // ── Sources ─────────────────────────────────────────────────────────
        .route("/sources", get(handlers::sources::list_sources))
        .route(
            "/sources/:source_id",
            get(handlers::sources::get_source).post(handlers::sources::create_power),
        )
        .route(
            "/sources/:source_id/:power_id",
            patch(handlers::sources::toggle_power),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
