//! Comment entity model and create DTO.

use punchlist_core::time::sql_datetime;
use punchlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub todo_id: DbId,
    pub content: String,
    pub author: String,
    #[serde(with = "sql_datetime")]
    pub created_at: Timestamp,
}

/// DTO for creating a comment. The owning todo id comes from the URL path,
/// never from the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateComment {
    pub content: String,
    pub author: String,
}
