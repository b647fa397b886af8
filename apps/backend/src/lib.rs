pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let addr = config.bind_addr();
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config),
    };

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Question routes
        .route("/api/questions/parse", post(routes::questions::parse))
        .route(
            "/api/questions/:id",
            get(routes::questions::get).delete(routes::questions::delete),
        )
        // Practice test routes
        .route(
            "/api/tests/:test_id/questions",
            get(routes::practice_tests::list)
                .post(routes::practice_tests::save)
                .delete(routes::practice_tests::clear),
        )
        .route(
            "/api/tests/:test_id/summary",
            get(routes::practice_tests::summary),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
