//! Repository for the `projects` table.

use punchlist_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::project::{Project, UpdateProject};

/// Column list shared across single-row queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, color, created_at";

/// Provides CRUD operations for projects, keyed by slug.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects, newest first, each with a live todo count.
    ///
    /// `COUNT(t.id)` over the LEFT JOIN yields zero for projects with no
    /// todos.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            "SELECT p.id, p.slug, p.name, p.description, p.color, p.created_at, \
                    COUNT(t.id) AS todo_count \
             FROM projects p \
             LEFT JOIN todos t ON t.project_id = p.id \
             GROUP BY p.id \
             ORDER BY p.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new project, returning the assigned id.
    ///
    /// A slug collision surfaces as a unique-violation database error;
    /// callers translate that into a conflict. No pre-check query is made,
    /// so concurrent creates cannot race past the constraint.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        name: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO projects (slug, name, description, color) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(slug)
        .bind(name)
        .bind(description)
        .bind(color)
        .fetch_one(pool)
        .await
    }

    /// Find a project by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a slug to its project id.
    pub async fn find_id_by_slug(pool: &PgPool, slug: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to the project with the given slug.
    ///
    /// Builds the SET clause from the fields present in `input`, in a fixed
    /// order, binding each value as a parameter. Callers must reject empty
    /// updates before calling; an update against a nonexistent slug is a
    /// silent no-op (zero rows affected).
    pub async fn update_by_slug(
        pool: &PgPool,
        slug: &str,
        input: &UpdateProject,
    ) -> Result<u64, sqlx::Error> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE projects SET ");
        let mut set = builder.separated(", ");
        if let Some(name) = &input.name {
            set.push("name = ").push_bind_unseparated(name);
        }
        if let Some(description) = &input.description {
            set.push("description = ").push_bind_unseparated(description);
        }
        if let Some(color) = &input.color {
            set.push("color = ").push_bind_unseparated(color);
        }
        builder.push(" WHERE slug = ").push_bind(slug);

        let result = builder.build().execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a project by slug. Returns the number of rows removed.
    ///
    /// Todos referencing the project are orphaned (`project_id` set to NULL
    /// by the foreign key), not deleted.
    pub async fn delete_by_slug(pool: &PgPool, slug: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
