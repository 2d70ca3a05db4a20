//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Error-to-response mapping

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use budgetly_core::auth::CredentialStore;
use budgetly_shared::TokenService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Token service for issuing and validating bearer tokens.
    pub token_service: Arc<TokenService>,
    /// Password hashing service.
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    /// Bundles the services handlers depend on.
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        token_service: TokenService,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            db: Arc::new(db),
            token_service: Arc::new(token_service),
            credentials: Arc::new(credentials),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
