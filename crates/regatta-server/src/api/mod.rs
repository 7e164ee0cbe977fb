//! HTTP API for the registration service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::auth::AdminAuth;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use registration_store::RegistrationStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Canonical registration store
    pub store: RegistrationStore,
    /// Admin credential check
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: RegistrationStore, auth: AdminAuth) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Public submission; admin listing on the same path
        .route("/api", post(handlers::submit).get(handlers::list))
        .route("/api/export", post(handlers::export))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
