//! Handlers for comments, nested under `/todos/{id}/comments` plus a
//! top-level delete at `/comments/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use punchlist_core::error::CoreError;
use punchlist_core::types::DbId;
use punchlist_db::models::comment::{Comment, CreateComment};
use punchlist_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::extract::Json;
use crate::state::AppState;

/// GET /todos/{id}/comments
pub async fn list(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = CommentRepo::list_for_todo(&state.pool, todo_id).await?;
    Ok(Json(comments))
}

/// POST /todos/{id}/comments
///
/// The owning todo id comes from the path (a non-integer id fails path
/// extraction with 400). No existence pre-check: a missing todo surfaces
/// as a foreign-key violation on insert, reported as 404.
pub async fn create(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    if input.content.is_empty() || input.author.is_empty() {
        return Err(CoreError::Validation("content and author are required".into()).into());
    }

    let id = match CommentRepo::create(&state.pool, todo_id, &input.content, &input.author).await {
        Ok(id) => id,
        Err(err) if punchlist_db::is_foreign_key_violation(&err) => {
            return Err(CoreError::not_found_id("Todo", todo_id).into());
        }
        Err(err) => return Err(err.into()),
    };
    tracing::info!(comment_id = id, todo_id, "Comment created");

    Ok((
        StatusCode::CREATED,
        Json(Comment {
            id,
            todo_id,
            content: input.content,
            author: input.author,
            created_at: Utc::now(),
        }),
    ))
}

/// DELETE /comments/{id}
///
/// Unconditional hard delete.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CommentRepo::delete(&state.pool, id).await?;
    tracing::info!(comment_id = id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
