mod auth;
mod catalog;
mod config;
mod error;
mod models;
mod prefs;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::auth::SessionStore;
use crate::catalog::{Catalog, CatalogClient};
use crate::config::Config;
use crate::prefs::{FilePreferenceStorage, PreferenceStore};

/// Everything the handlers need, owned here at the composition root.
#[derive(Clone)]
pub struct AppState {
    pub jobs: CatalogClient,
    pub prefs: Arc<PreferenceStore>,
    pub sessions: SessionStore,
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn readyz(jobs: CatalogClient) -> impl IntoResponse {
    if jobs.catalog().is_empty() {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    } else {
        (StatusCode::OK, "ready")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobboard=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    let seed = config.catalog_seed.unwrap_or_else(|| {
        use rand::Rng;
        rand::rng().random()
    });
    let catalog = Arc::new(Catalog::new(catalog::seed::generate(
        config.catalog_size,
        seed,
    ))?);
    tracing::info!("Seeded catalog with {} postings (seed {seed})", catalog.len());

    let storage = FilePreferenceStorage::new(&config.data_dir);
    let prefs = Arc::new(PreferenceStore::load(Box::new(storage)).await);

    let state = AppState {
        jobs: CatalogClient::new(catalog, Duration::from_millis(config.latency_ms)),
        prefs,
        sessions: SessionStore::new(),
    };

    let readyz_jobs = state.jobs.clone();
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(move || readyz(readyz_jobs.clone())))
        .merge(routes::ui::router())
        .merge(routes::api::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
