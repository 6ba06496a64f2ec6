//! streamwall-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints, runs
//! database migrations, and spins up the data-source polling tasks.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use streamwall_gateway::api;
use streamwall_gateway::app_state::AppState;
use streamwall_gateway::config::GatewayConfig;
use streamwall_gateway::domain::{EventBus, PresenceTracker};
use streamwall_gateway::ingest::IngestManager;
use streamwall_gateway::persistence::Store;
use streamwall_gateway::service::{SessionService, StreamService};
use streamwall_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting streamwall-gateway");

    // Connect to PostgreSQL and run migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    let store = Store::new(pool);
    store.migrate().await?;
    tracing::info!("database migrations applied");

    // Build domain layer
    let event_bus = EventBus::new(config.event_bus_capacity);
    let presence = Arc::new(PresenceTracker::new());

    // Build service layer
    let stream_service = StreamService::new(store.clone(), event_bus.clone());
    let session_service =
        SessionService::new(store.clone(), Arc::clone(&presence), event_bus.clone());
    let ingest = Arc::new(IngestManager::new(
        store.clone(),
        event_bus.clone(),
        &config,
    )?);

    // Start polling every enabled source on record
    ingest.start_all().await?;

    // Build application state
    let app_state = AppState {
        store,
        stream_service,
        session_service,
        ingest: Arc::clone(&ingest),
        event_bus,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler));

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop source polling before exiting
    ingest.stop_all().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
