use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use stack_advisor::api;
use stack_advisor::config::Config;
use stack_advisor::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        "LLM provider: {} ({})",
        config.llm.provider,
        if config.llm.is_available() { "configured" } else { "unavailable, rule-based only" }
    );
    tracing::info!(
        "Vector index: {} ({})",
        config.vector.index_name,
        if config.vector.is_available() { "configured" } else { "unavailable" }
    );

    let cors = cors_layer(&config.cors_origins)?;
    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/api/ai/recommend-stack", post(api::recommend::recommend_stack))
        .route("/api/ai/technologies", get(api::recommend::technologies))
        .route(
            "/api/ai/analyze-compatibility",
            post(api::recommend::analyze_compatibility),
        )
        .route("/api/ai/analyze-technology", post(api::analyze::analyze_technology))
        .route("/api/ai/index-documents", post(api::search::index_documents))
        .route("/api/ai/search", post(api::search::semantic_search))
        .route("/api/ai/status", get(api::recommend::status))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Build the CORS layer from the configured origin list; a single "*"
/// allows any origin.
fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }
    let parsed: Result<Vec<HeaderValue>, _> =
        origins.iter().map(|o| o.parse::<HeaderValue>()).collect();
    Ok(layer.allow_origin(AllowOrigin::list(parsed?)))
}

/// Resolve on SIGTERM or Ctrl+C so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
