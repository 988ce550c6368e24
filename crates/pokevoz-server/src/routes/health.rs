//! Liveness and upstream configuration summary.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let status = state.generation.to_status();
    Json(serde_json::json!({
        "status": "ok",
        "generation": state.relay.generation_available(),
        "provider": status.provider,
        "model": status.model,
        "speciesApi": state.config.pokeapi_base,
    }))
}
