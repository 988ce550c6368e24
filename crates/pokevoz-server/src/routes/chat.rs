//! Generic prompt passthrough to the generation API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use pokevoz_core::{ChatReply, ChatRequest};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let prompt = body.map(|Json(req)| req.prompt).ok().flatten().unwrap_or_default();
    let response = state.relay.chat(&prompt).await?;
    Ok(Json(ChatReply { response }))
}
