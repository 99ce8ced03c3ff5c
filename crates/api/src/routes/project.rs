//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{slug}",
            get(project::get_by_slug)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{slug}/stats", get(project::stats))
}
