mod assessment;
mod config;
mod errors;
mod interview;
mod llm_client;
mod rate_limit;
mod recommendation;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::Catalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::rate_limit::{spawn_sweeper, RateLimiter, SystemClock};
use crate::recommendation::{
    CareerRecommender, FallbackRecommender, LlmRecommender, RuleBasedRecommender,
};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Fail fast on an inconsistent built-in catalog
    let catalog = Catalog::builtin();
    catalog
        .validate()
        .context("built-in assessment catalog is inconsistent")?;
    info!(
        "Catalog loaded: {} questions, {} careers",
        catalog.questions().len(),
        catalog.careers().len()
    );

    // Initialize LLM client (optional)
    let llm = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), &config.openai_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            warn!("OPENAI_API_KEY not set: recommendations use the rule engine, interview AI routes are disabled");
            None
        }
    };

    let recommender: Arc<dyn CareerRecommender> = match &llm {
        Some(client) => Arc::new(FallbackRecommender::new(
            LlmRecommender::new(client.clone(), catalog),
            RuleBasedRecommender::new(catalog),
        )),
        None => Arc::new(RuleBasedRecommender::new(catalog)),
    };

    // Rate limiting for the interview endpoints
    let rate_limiter = Arc::new(RateLimiter::new(Arc::new(SystemClock)));
    let sweeper = spawn_sweeper(&rate_limiter, config.rate_limit_sweep);
    info!("Rate limits: {:?}", config.rate_limits);

    // Build app state
    let state = AppState {
        catalog,
        llm,
        recommender,
        rate_limiter,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            // TODO: restrict CORS origins once the frontend host is fixed
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.shutdown().await;
    info!("Shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
