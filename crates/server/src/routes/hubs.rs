use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use service::record::Record;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// 201 with the stored hub, generated id included.
pub async fn create_hub(
    State(state): State<ServerState>,
    body: Option<Json<Record>>,
) -> (StatusCode, Json<Record>) {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    let created = state.hubs.create(fields).await;
    (StatusCode::CREATED, Json(created))
}

/// 200 with every hub, in insertion order.
pub async fn list_hubs(State(state): State<ServerState>) -> Json<Vec<Record>> {
    Json(state.hubs.list().await)
}

/// Lookup is by the path id, always.
pub async fn get_hub(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.hubs.get(&id).await?))
}

/// Partial update: unspecified fields survive the merge.
pub async fn patch_hub(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Option<Json<Record>>,
) -> Result<Json<Record>, ApiError> {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    Ok(Json(state.hubs.patch(&id, fields).await?))
}

/// Full replace: unspecified fields are dropped.
pub async fn replace_hub(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Option<Json<Record>>,
) -> Result<Json<Record>, ApiError> {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    Ok(Json(state.hubs.replace(&id, fields).await?))
}

/// 200 with the removed hub.
pub async fn delete_hub(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.hubs.delete(&id).await?))
}
