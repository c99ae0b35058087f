//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use auth_common::{AppConfig, AppError, JwtService};
use auth_core::UserRepository;
use auth_db::{create_pool, ensure_schema, PgUserRepository};
use auth_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Connect to PostgreSQL and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = auth_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        ensure_schema(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database schema ready");
    }

    let user_repo = Arc::new(PgUserRepository::new(pool));
    create_app_state_with_repository(user_repo, config)
}

/// Create AppState around an existing user directory
pub fn create_app_state_with_repository(
    user_repo: Arc<dyn UserRepository>,
    config: AppConfig,
) -> Result<AppState, AppError> {
    if config.jwt.secret.is_empty() {
        return Err(AppError::Config("JWT secret must not be empty".to_string()));
    }

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {}", e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    run_server(app, listener).await
}
