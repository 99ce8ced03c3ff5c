//! Aggregate statistics over the `todos` table.

use punchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::stats::TodoStats;

/// The five counters, computed in a single pass with filtered aggregates.
const COUNTERS: &str = "\
    COUNT(*) AS total, \
    COUNT(*) FILTER (WHERE completed) AS completed, \
    COUNT(*) FILTER (WHERE NOT completed) AS pending, \
    COUNT(*) FILTER (WHERE priority = 'high' AND NOT completed) AS high_priority, \
    COUNT(*) FILTER (WHERE due_date < NOW() AND NOT completed) AS overdue";

/// Computes on-demand todo statistics. Nothing here is persisted.
pub struct StatsRepo;

impl StatsRepo {
    /// Global stats across all todos.
    pub async fn global(pool: &PgPool) -> Result<TodoStats, sqlx::Error> {
        let query = format!("SELECT {COUNTERS} FROM todos");
        sqlx::query_as::<_, TodoStats>(&query).fetch_one(pool).await
    }

    /// Stats restricted to one project's todos.
    pub async fn for_project(pool: &PgPool, project_id: DbId) -> Result<TodoStats, sqlx::Error> {
        let query = format!("SELECT {COUNTERS} FROM todos WHERE project_id = $1");
        sqlx::query_as::<_, TodoStats>(&query)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }
}
