//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use invite_common::{AppConfig, AppError, JwtService, StoreBackend, StoreConfig};
use invite_core::traits::InvitationStore;
use invite_db::{create_pool, MemoryInvitationStore, PgInvitationStore, PoolConfig};
use invite_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, &state.config().cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    if config.jwt.insecure_default {
        warn!("JWT_SECRET is not set; signing with an insecure development secret");
    }

    let store = create_store(&config.store).await?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .store(store)
        .jwt_service(jwt_service)
        .lookup(config.store.lookup)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create the configured invitation store
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn InvitationStore>, AppError> {
    match config.backend {
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool_config = PoolConfig::new(database.url.as_str())
                .with_connections(database.min_connections, database.max_connections);
            let pool = create_pool(&pool_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            let store = PgInvitationStore::new(pool, &config.table)?;
            info!(table = %store.table(), lookup = %config.lookup, "Invitation store ready");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!(
                codes = config.seed_codes.len(),
                "Using in-memory invitation store; redemptions are lost on restart"
            );
            Ok(Arc::new(MemoryInvitationStore::with_codes(
                config.seed_codes.iter().cloned(),
            )))
        }
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
