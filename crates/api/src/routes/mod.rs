pub mod comment;
pub mod health;
pub mod project;
pub mod stats;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /projects                  list, create
/// /projects/{slug}           get, update, delete
/// /projects/{slug}/stats     project-scoped stats
///
/// /todos                     list (filtered), create
/// /todos/{id}                get (with comments), update, delete
/// /todos/{id}/complete       mark complete
/// /todos/{id}/uncomplete     mark incomplete
/// /todos/{id}/comments       list, create
///
/// /comments/{id}             delete
///
/// /stats                     global stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/todos", todo::router())
        .nest("/comments", comment::router())
        .nest("/stats", stats::router())
}
