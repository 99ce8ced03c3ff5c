//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use punchlist_core::error::CoreError;
use punchlist_db::models::project::{CreateProject, Project, UpdateProject, DEFAULT_COLOR};
use punchlist_db::models::stats::TodoStats;
use punchlist_db::repositories::{ProjectRepo, StatsRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /projects
///
/// All projects, newest first, each annotated with a live todo count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /projects
///
/// The response echoes the request fields with the id and a handler-time
/// `created_at`; the row is not re-read from the store.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.slug.is_empty() || input.name.is_empty() {
        return Err(CoreError::Validation("slug and name are required".into()).into());
    }

    let color = input
        .color
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COLOR)
        .to_string();

    // Slug uniqueness is enforced by the store constraint, not a pre-check,
    // so concurrent creates cannot race past it.
    let id = match ProjectRepo::create(
        &state.pool,
        &input.slug,
        &input.name,
        input.description.as_deref(),
        &color,
    )
    .await
    {
        Ok(id) => id,
        Err(err) if punchlist_db::is_unique_violation(&err) => {
            return Err(CoreError::Conflict("project with this slug already exists".into()).into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(project_id = id, slug = %input.slug, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(Project {
            id,
            slug: input.slug,
            name: input.name,
            description: input.description,
            color,
            created_at: Utc::now(),
            todo_count: None,
        }),
    ))
}

/// GET /projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            key: slug,
        })?;
    Ok(Json(project))
}

/// PUT /projects/{slug}
///
/// Partial update; a no-op against an unknown slug still returns 200.
/// The caller re-GETs for the updated record.
pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<StatusCode> {
    if input.is_empty() {
        return Err(AppError::BadRequest("no fields to update".into()));
    }

    ProjectRepo::update_by_slug(&state.pool, &slug, &input).await?;
    tracing::info!(slug = %slug, "Project updated");
    Ok(StatusCode::OK)
}

/// DELETE /projects/{slug}
///
/// Unconditional: deleting an unknown slug is the same 204 as deleting an
/// existing one. Associated todos are orphaned, not removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    ProjectRepo::delete_by_slug(&state.pool, &slug).await?;
    tracing::info!(slug = %slug, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /projects/{slug}/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<TodoStats>> {
    let project_id = ProjectRepo::find_id_by_slug(&state.pool, &slug)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            key: slug,
        })?;

    let stats = StatsRepo::for_project(&state.pool, project_id).await?;
    Ok(Json(stats))
}
