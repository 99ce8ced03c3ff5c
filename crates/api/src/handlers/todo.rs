//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use punchlist_core::error::CoreError;
use punchlist_core::types::DbId;
use punchlist_db::models::todo::{CreateTodo, Todo, UpdateTodo, DEFAULT_PRIORITY};
use punchlist_db::repositories::{CommentRepo, TodoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::query::TodoListParams;
use crate::state::AppState;

/// GET /todos
///
/// Filtered, paginated listing. Ordering is fixed: incomplete first, then
/// severity, then newest.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let filter = params.resolve();
    let todos = TodoRepo::list(&state.pool, &filter).await?;
    Ok(Json(todos))
}

/// POST /todos
///
/// Priority defaults to `medium` when blank; the value is otherwise taken
/// as-is (the allowed set is a convention, not validated). The response
/// carries handler-time timestamps rather than re-reading the row.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    if input.title.is_empty() || input.author.is_empty() {
        return Err(CoreError::Validation("title and author are required".into()).into());
    }

    let priority = input
        .priority
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PRIORITY)
        .to_string();

    let id = TodoRepo::create(&state.pool, &input, &priority).await?;
    tracing::info!(todo_id = id, author = %input.author, "Todo created");

    let now = Utc::now();
    Ok((
        StatusCode::CREATED,
        Json(Todo {
            id,
            project_id: input.project_id,
            title: input.title,
            description: input.description,
            completed: false,
            priority,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
            author: input.author,
            project: None,
            comments: None,
        }),
    ))
}

/// GET /todos/{id}
///
/// Fetches the todo with its project snapshot, then its comments in a
/// second query. The two reads are not transactional; a concurrent
/// mutation between them can show through.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let mut todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Todo", id))?;

    let comments = CommentRepo::list_for_todo(&state.pool, id).await?;
    todo.comments = Some(comments);

    Ok(Json(todo))
}

/// PUT /todos/{id}
///
/// Partial update: only fields present in the body enter the SET clause.
/// No existence check; updating a nonexistent id succeeds silently. The
/// caller re-GETs for the updated record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<StatusCode> {
    if input.is_empty() {
        return Err(AppError::BadRequest("no fields to update".into()));
    }

    TodoRepo::update(&state.pool, id, &input).await?;
    tracing::info!(todo_id = id, "Todo updated");
    Ok(StatusCode::OK)
}

/// POST /todos/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    TodoRepo::set_completed(&state.pool, id, true).await?;
    tracing::info!(todo_id = id, "Todo completed");
    Ok(StatusCode::OK)
}

/// POST /todos/{id}/uncomplete
pub async fn uncomplete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    TodoRepo::set_completed(&state.pool, id, false).await?;
    tracing::info!(todo_id = id, "Todo uncompleted");
    Ok(StatusCode::OK)
}

/// DELETE /todos/{id}
///
/// Unconditional: a nonexistent id gets the same 204. Comments cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    TodoRepo::delete(&state.pool, id).await?;
    tracing::info!(todo_id = id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
