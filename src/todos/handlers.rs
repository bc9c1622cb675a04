use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, DeletedResponse, TodoListResponse, TodoResponse, UpdateTodoRequest},
        repo::Todo,
    },
};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_todos(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = Todo::list_for_user(&state.db, user.id).await?;
    Ok(Json(TodoListResponse {
        success: true,
        todos,
    }))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let title = payload.title.trim();
    if title.is_empty() {
        warn!("create todo without title");
        return Err(ApiError::Validation("Title is required".into()));
    }

    let todo = Todo::insert(
        &state.db,
        user.id,
        title,
        payload.description.as_deref(),
        payload.due_date,
        payload.priority.unwrap_or_default(),
    )
    .await?;

    info!(todo_id = %todo.id, "todo created");
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            success: true,
            todo,
        }),
    ))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn update_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    if let Some(title) = payload.title.take() {
        let title = title.trim().to_string();
        if title.is_empty() {
            warn!(todo_id = %id, "update todo with empty title");
            return Err(ApiError::Validation("Title is required".into()));
        }
        payload.title = Some(title);
    }

    let mut todo = Todo::find_for_user(&state.db, user.id, id)
        .await?
        .ok_or_else(|| {
            warn!(todo_id = %id, "todo not found for update");
            ApiError::TodoNotFound
        })?;

    payload.apply(&mut todo);
    let todo = todo.save(&state.db).await?;

    info!(todo_id = %todo.id, "todo updated");
    Ok(Json(TodoResponse {
        success: true,
        todo,
    }))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_todo(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = Todo::delete_for_user(&state.db, user.id, id).await?;
    if !deleted {
        warn!(todo_id = %id, "todo not found for delete");
        return Err(ApiError::TodoNotFound);
    }

    info!(todo_id = %id, "todo deleted");
    Ok(Json(DeletedResponse {
        success: true,
        message: "Todo deleted successfully".into(),
    }))
}
