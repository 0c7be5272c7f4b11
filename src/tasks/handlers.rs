use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    tasks::{
        dto::{CreateTaskRequest, MessageResponse, TaskCreatedResponse, UpdateTaskRequest},
        repo::Task,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
}

#[instrument(skip(state))]
async fn list_tasks(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = Task::list_by_owner(&state.db, user.id).await?;
    Ok(Json(tasks))
}

#[instrument(skip(state, payload))]
async fn create_task(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskCreatedResponse>), ApiError> {
    let Some(title) = payload.title.as_deref().filter(|t| !t.is_empty()) else {
        warn!(user_id = user.id, "task creation rejected: missing title");
        return Err(ApiError::Validation("Title is required".into()));
    };

    let task = Task::create(
        &state.db,
        user.id,
        title,
        payload.description.as_deref(),
        payload.due_date,
    )
    .await?;

    info!(user_id = user.id, task_id = task.id, "task created");
    Ok((
        StatusCode::CREATED,
        Json(TaskCreatedResponse {
            message: "Task created".into(),
            task_id: task.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
async fn update_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = Task::update(
        &state.db,
        user.id,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.due_date,
        payload.completed,
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound("Task not found or not permitted".into()));
    }

    info!(user_id = user.id, task_id = id, "task updated");
    Ok(Json(MessageResponse {
        message: "Task updated".into(),
    }))
}

#[instrument(skip(state))]
async fn delete_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = Task::delete(&state.db, user.id, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found or not permitted".into()));
    }

    info!(user_id = user.id, task_id = id, "task deleted");
    Ok(Json(MessageResponse {
        message: "Task deleted".into(),
    }))
}
