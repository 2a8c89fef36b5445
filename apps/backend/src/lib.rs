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

use crate::services::sheets::{SheetsConfig, SheetsService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetsService>,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/topics", get(routes::content::topics))
        .route("/api/topics/:id/questions", get(routes::content::questions))
        .route("/api/leaderboard", get(routes::content::leaderboard))
        .route("/api/spell/words", get(routes::words::spell_words))
        .route("/api/spell/meanings", get(routes::words::meaning_words))
        .route("/api/grade/spelling", post(routes::grade::spelling))
        .route("/api/grade/meaning", post(routes::grade::meaning))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        sheets: Arc::new(SheetsService::new(SheetsConfig::from_env())),
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
