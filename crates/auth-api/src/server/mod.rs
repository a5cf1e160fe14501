//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use auth_common::{AppConfig, AppError, PasswordService};
use auth_service::ServiceContextBuilder;
use auth_store::{InMemorySessionStore, JsonFileUserStore};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(path = %config.storage.users_file.display(), "Using JSON credential store");
    let user_store = Arc::new(JsonFileUserStore::new(config.storage.users_file.clone()));
    let session_store = Arc::new(InMemorySessionStore::new());

    let session_ttl = config
        .session
        .ttl_seconds
        .map(|secs| {
            chrono::Duration::try_seconds(secs)
                .ok_or_else(|| AppError::Config(format!("Session TTL out of range: {secs}")))
        })
        .transpose()?;
    if let Some(ttl) = session_ttl {
        info!(ttl_seconds = ttl.num_seconds(), "Sessions expire");
    }

    let service_context = ServiceContextBuilder::new()
        .user_store(user_store)
        .session_store(session_store)
        .password_service(PasswordService::new())
        .session_ttl(session_ttl)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Resolve the configured listen address
pub fn listen_addr(config: &AppConfig) -> Result<SocketAddr, AppError> {
    let address = config.api.address();
    address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {address}: {e}")))
}

/// Run the HTTP server on an already bound listener
pub async fn serve(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(app, listener).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = listen_addr(&config)?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
