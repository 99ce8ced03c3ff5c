//! Aggregate todo statistics, computed on demand and never persisted.

use serde::Serialize;
use sqlx::FromRow;

/// Counter set produced by the stats aggregate query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    /// High-priority AND not completed.
    pub high_priority: i64,
    /// Due before now AND not completed.
    pub overdue: i64,
}
