//! Repository for the `comments` table.

use punchlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;

const COLUMNS: &str = "id, todo_id, content, author, created_at";

/// Provides comment listing, creation, and deletion.
pub struct CommentRepo;

impl CommentRepo {
    /// List all comments on a todo, oldest first. Unpaginated.
    pub async fn list_for_todo(pool: &PgPool, todo_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM comments WHERE todo_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(todo_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a comment, returning the assigned id.
    ///
    /// The referenced todo is not checked for existence here; a dangling
    /// `todo_id` surfaces as a foreign-key database error.
    pub async fn create(
        pool: &PgPool,
        todo_id: DbId,
        content: &str,
        author: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO comments (todo_id, content, author) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(todo_id)
        .bind(content)
        .bind(author)
        .fetch_one(pool)
        .await
    }

    /// Hard-delete a comment by id. No existence check.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
