//! Oracle chat relay
//!
//! An HTTP service that relays chat messages to an on-chain LLM oracle
//! contract and returns the oracle's structured reply.

mod api;
mod chain;
mod chat;
mod config;
mod runtime;
mod state_machine;

use api::{create_router, AppState};
use config::ServerConfig;
use state_machine::ChatContext;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oracle_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();

    // Configuration. Chain settings are resolved per request.
    let config = ServerConfig::from_env();
    match config.max_polls {
        Some(max_polls) => tracing::info!(
            poll_interval_ms = config.poll_interval.as_millis(),
            max_polls,
            "Reply polling is bounded"
        ),
        None => tracing::info!(
            poll_interval_ms = config.poll_interval.as_millis(),
            "Reply polling is unbounded"
        ),
    }

    let state = AppState::from_env(ChatContext::from(&config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
