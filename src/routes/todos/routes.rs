use axum::{body::Bytes, extract::State, Json};

use super::dto::{CreateTodo, TodoView};
use super::queries;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TodoView>>, ApiError> {
    let todos = queries::list_todos(&state.db).await?;
    tracing::debug!(count = todos.len(), "listed todos");

    Ok(Json(todos.into_iter().map(TodoView::from).collect()))
}

/// Takes the raw body so that a missing or empty payload still reaches
/// title validation instead of being rejected by the `Json` extractor.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TodoView>, ApiError> {
    let title = CreateTodo::from_body(&body)?.into_title()?;

    let todo = queries::create_todo(&state.db, title).await?;
    tracing::info!(id = ?todo.id, title = %todo.title, "todo created");

    Ok(Json(todo.into()))
}
