use axum::{extract::State, routing::get, Json, Router};
use fbwall::{FeedSource, GraphClient};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FeedSource>,
    pub page_id: Option<String>,
    pub access_token: Option<String>,
    pub options: fbwall::WallOptions,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    page_configured: bool,
    version: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        page_configured: state.page_id.is_some() && state.access_token.is_some(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(routes::wall::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fbwall=debug,tower_http=info")),
        )
        .init();

    tracing::info!("fbwall server initializing...");

    let config = ServerConfig::from_env()?;

    if config.page_id.is_none() {
        tracing::warn!("No FBWALL_PAGE_ID set - /wall will render an error block");
    }
    if config.access_token.is_none() {
        tracing::warn!("No FBWALL_ACCESS_TOKEN set - /wall will render an error block");
    }

    let state = AppState {
        source: Arc::new(GraphClient::new()),
        page_id: config.page_id.clone(),
        access_token: config.access_token.clone(),
        options: config.options.clone(),
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, lang = %config.options.lang, "fbwall server ready");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
