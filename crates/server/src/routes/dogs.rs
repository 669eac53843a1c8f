use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use service::record::Record;

use crate::errors::ApiError;
use crate::routes::ServerState;

// Missing or malformed bodies are tolerated as an empty field map rather
// than rejected, so every extractor below takes `Option<Json<Record>>`.

/// 201 with the stored dog, generated id included.
pub async fn create_dog(
    State(state): State<ServerState>,
    body: Option<Json<Record>>,
) -> (StatusCode, Json<Record>) {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    let created = state.dogs.create(fields).await;
    (StatusCode::CREATED, Json(created))
}

/// 200 with every dog, in insertion order.
pub async fn list_dogs(State(state): State<ServerState>) -> Json<Vec<Record>> {
    Json(state.dogs.list().await)
}

pub async fn get_dog(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.dogs.get(&id).await?))
}

/// Partial update: unspecified fields survive the merge.
pub async fn patch_dog(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Option<Json<Record>>,
) -> Result<Json<Record>, ApiError> {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    Ok(Json(state.dogs.patch(&id, fields).await?))
}

/// Full replace: unspecified fields are dropped.
pub async fn replace_dog(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Option<Json<Record>>,
) -> Result<Json<Record>, ApiError> {
    let fields = body.map(|Json(f)| f).unwrap_or_default();
    Ok(Json(state.dogs.replace(&id, fields).await?))
}

/// 200 with the removed dog.
pub async fn delete_dog(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.dogs.delete(&id).await?))
}
