//! Species descriptions: `/api/pokemon` plus its deprecated aliases.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use pokevoz_core::{DescribeRequest, DescribeResponse};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pokemon", post(describe))
        .route("/pokemon/{name}", get(describe_by_path))
}

/// `POST /pokemon`, kept for pages that predate the `/api` prefix.
pub fn legacy_routes() -> Router<Arc<AppState>> {
    Router::new().route("/pokemon", post(describe))
}

async fn describe(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DescribeRequest>, JsonRejection>,
) -> ApiResult<Json<DescribeResponse>> {
    // An unreadable body is treated like a body without a name.
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!("Unreadable describe body: {}", rejection);
            DescribeRequest::default()
        }
    };
    let description = state.relay.describe(req.requested_name()).await?;
    Ok(Json(description.into()))
}

async fn describe_by_path(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<DescribeResponse>> {
    let description = state.relay.describe(&name).await?;
    Ok(Json(description.into()))
}
