//! Handler for global todo statistics.

use axum::extract::State;
use axum::Json;
use punchlist_db::models::stats::TodoStats;
use punchlist_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats
///
/// One aggregate pass over all todos; nothing is persisted.
pub async fn global(State(state): State<AppState>) -> AppResult<Json<TodoStats>> {
    let stats = StatsRepo::global(&state.pool).await?;
    Ok(Json(stats))
}
