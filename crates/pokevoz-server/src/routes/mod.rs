//! HTTP route handlers.

pub mod chat;
pub mod health;
pub mod pokemon;
pub mod proxy;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(pokemon::legacy_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(pokemon::routes())
        .merge(proxy::routes())
        .merge(chat::routes())
        .merge(health::routes())
}
