use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};
use crate::http::types::{ApiError, AppJson};

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route(
            "/todos/:id",
            get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>),
        )
        .with_state(state)
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    AppJson(payload): AppJson<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
    AppJson(payload): AppJson<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(state.service.update(id, payload).await?))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
