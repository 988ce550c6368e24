//! Species-data passthrough.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/proxy-pokemon/{name}", get(proxy_pokemon))
}

async fn proxy_pokemon(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let raw = state.relay.species_passthrough(&name).await?;
    Ok(Json(raw))
}
