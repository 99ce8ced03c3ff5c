//! Project entity model and DTOs.

use punchlist_core::time::sql_datetime;
use punchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Default color assigned when a project is created without one.
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    #[serde(with = "sql_datetime")]
    pub created_at: Timestamp,
    /// Live count of associated todos. Populated only by the list query.
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_count: Option<i64>,
}

/// DTO for creating a new project.
///
/// All fields default so that absent JSON keys arrive as empty/`None`;
/// required-field validation happens in the handler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProject {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to [`DEFAULT_COLOR`] when blank or absent.
    pub color: Option<String>,
}

/// DTO for partially updating a project. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl UpdateProject {
    /// Whether the request carries no updatable fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none()
    }
}
