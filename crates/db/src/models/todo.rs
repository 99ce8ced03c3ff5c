//! Todo entity model, DTOs, and the list filter.

use punchlist_core::time::{sql_datetime, sql_datetime_opt};
use punchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::comment::Comment;

/// Priority assigned when a todo is created without one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Denormalized snapshot of a todo's owning project, carried on reads.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub slug: String,
    pub name: String,
    pub color: String,
}

/// A todo item as returned by the API.
///
/// `project` is present when the todo belongs to a project that still
/// exists; `comments` is populated only by the single-item fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    #[serde(with = "sql_datetime_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(with = "sql_datetime")]
    pub created_at: Timestamp,
    #[serde(with = "sql_datetime")]
    pub updated_at: Timestamp,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// Flat row shape produced by the todos-with-project-snapshot queries.
///
/// The LEFT JOIN yields nullable project columns; [`From`] folds them into
/// an optional [`ProjectRef`].
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author: String,
    pub project_slug: Option<String>,
    pub project_name: Option<String>,
    pub project_color: Option<String>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        let project = match (row.project_slug, row.project_name, row.project_color) {
            (Some(slug), Some(name), Some(color)) => Some(ProjectRef { slug, name, color }),
            _ => None,
        };
        Todo {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            priority: row.priority,
            due_date: row.due_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author: row.author,
            project,
            comments: None,
        }
    }
}

/// DTO for creating a new todo. Required-field validation happens in the
/// handler; `priority` falls back to [`DEFAULT_PRIORITY`] when blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodo {
    pub project_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    #[serde(with = "sql_datetime_opt")]
    pub due_date: Option<Timestamp>,
    pub author: String,
}

/// DTO for partially updating a todo. Only present fields enter the
/// generated SET clause; "present-but-false/empty" is distinct from absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    #[serde(with = "sql_datetime_opt")]
    pub due_date: Option<Timestamp>,
}

impl UpdateTodo {
    /// Whether the request carries no updatable fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Resolved filter for the todo list query.
///
/// Predicates are applied conjunctively, each only when present. `limit`
/// and `offset` are already clamped by the time this struct exists.
#[derive(Debug, Clone)]
pub struct TodoFilter {
    pub project_id: Option<DbId>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl TodoFilter {
    /// Default page size, also the fallback for out-of-range values.
    pub const DEFAULT_LIMIT: i64 = 50;
    /// Largest accepted explicit page size.
    pub const MAX_LIMIT: i64 = 100;
}

impl Default for TodoFilter {
    fn default() -> Self {
        TodoFilter {
            project_id: None,
            completed: None,
            priority: None,
            author: None,
            search: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
