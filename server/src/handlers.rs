//! One handler per todo operation.
//!
//! Each handler validates its input, makes at most one store call, and
//! echoes what the caller sent. Create and update never report the stored
//! row; the submitted todo, `id` included, is returned as-is.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use todo_core::Todo;
use todo_store::SharedStore;
use tracing::info;

use crate::error::ApiError;

type Payload = Result<Json<Todo>, JsonRejection>;

pub async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list().await?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    payload: Payload,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(todo) = payload?;
    store.create(todo.clone()).await?;
    info!("Created todo {:?}", todo.text);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    payload: Payload,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(todo) = payload?;
    store.update(id, todo.clone()).await?;
    info!("Updated todo {}", id);
    Ok(Json(todo))
}

/// Responds with a JSON `null` body.
pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<()>, ApiError> {
    let id = parse_id(&raw_id)?;
    store.delete(id).await?;
    info!("Deleted todo {}", id);
    Ok(Json(()))
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::Validation(format!("invalid todo id {raw:?}: {e}")))
}
