//! Repository for the `todos` table.
//!
//! The list query is assembled incrementally with [`QueryBuilder`]: a fixed
//! base SELECT, then one predicate per present filter field, so placeholder
//! count and binding order stay in sync by construction.

use punchlist_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::todo::{CreateTodo, Todo, TodoFilter, TodoRow, UpdateTodo};

/// Base SELECT shared by list and single-item reads: all todo columns plus
/// the owning project's snapshot via LEFT JOIN (nullable when the todo has
/// no project or the project was deleted).
const BASE_SELECT: &str = "\
    SELECT t.id, t.project_id, t.title, t.description, t.completed, t.priority, \
           t.due_date, t.created_at, t.updated_at, t.author, \
           p.slug AS project_slug, p.name AS project_name, p.color AS project_color \
    FROM todos t \
    LEFT JOIN projects p ON p.id = t.project_id";

/// Explicit severity rank for ordering. Lexical ordering of the priority
/// tokens only coincidentally matches severity; this mapping does not break
/// if the tokens change.
const PRIORITY_RANK: &str = "CASE t.priority WHEN 'high' THEN 2 WHEN 'medium' THEN 1 ELSE 0 END";

/// Provides CRUD and filtered listing for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List todos matching `filter`, with the fixed ordering: incomplete
    /// before completed, then descending severity, then newest first.
    /// The ordering is not caller-overridable.
    pub async fn list(pool: &PgPool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(BASE_SELECT);
        builder.push(" WHERE TRUE");

        if let Some(project_id) = filter.project_id {
            builder.push(" AND t.project_id = ").push_bind(project_id);
        }
        if let Some(completed) = filter.completed {
            builder.push(" AND t.completed = ").push_bind(completed);
        }
        if let Some(priority) = &filter.priority {
            builder.push(" AND t.priority = ").push_bind(priority);
        }
        if let Some(author) = &filter.author {
            builder.push(" AND t.author = ").push_bind(author);
        }
        if let Some(search) = &filter.search {
            // Case-sensitive substring match over title OR description.
            let pattern = format!("%{search}%");
            builder
                .push(" AND (t.title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR t.description LIKE ")
                .push_bind(pattern)
                .push(")");
        }

        builder
            .push(" ORDER BY t.completed ASC, ")
            .push(PRIORITY_RANK)
            .push(" DESC, t.created_at DESC")
            .push(" LIMIT ")
            .push_bind(filter.limit)
            .push(" OFFSET ")
            .push_bind(filter.offset);

        let rows = builder
            .build_query_as::<TodoRow>()
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Insert a new todo, returning the assigned id.
    ///
    /// `priority` is passed separately because the handler resolves the
    /// default before calling.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTodo,
        priority: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO todos (project_id, title, description, priority, due_date, author) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(input.project_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(priority)
        .bind(input.due_date)
        .bind(&input.author)
        .fetch_one(pool)
        .await
    }

    /// Fetch a single todo with its project snapshot. Comments are a
    /// separate read ([`CommentRepo::list_for_todo`]); the pair is not
    /// transactional.
    ///
    /// [`CommentRepo::list_for_todo`]: crate::repositories::CommentRepo::list_for_todo
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("{BASE_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Todo::from))
    }

    /// Apply a partial update to a todo by id, bumping `updated_at`.
    ///
    /// SET clauses are generated only for present fields, in a fixed order.
    /// Callers must reject empty updates; an update against a nonexistent
    /// id is a silent no-op.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<u64, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE todos SET ");
        let mut set = builder.separated(", ");
        if let Some(title) = &input.title {
            set.push("title = ").push_bind_unseparated(title);
        }
        if let Some(description) = &input.description {
            set.push("description = ").push_bind_unseparated(description);
        }
        if let Some(completed) = input.completed {
            set.push("completed = ").push_bind_unseparated(completed);
        }
        if let Some(priority) = &input.priority {
            set.push("priority = ").push_bind_unseparated(priority);
        }
        if let Some(due_date) = input.due_date {
            set.push("due_date = ").push_bind_unseparated(due_date);
        }
        set.push("updated_at = NOW()");
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Set the completed flag unconditionally, bumping `updated_at`.
    /// No existence check; a miss affects zero rows.
    pub async fn set_completed(
        pool: &PgPool,
        id: DbId,
        completed: bool,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE todos SET completed = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(completed)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a todo by id. Comments cascade at the store level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
