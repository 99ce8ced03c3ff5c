//! Route definitions for the `/todos` resource, including nested comments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comment, todo};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list).post(todo::create))
        .route(
            "/{id}",
            get(todo::get_by_id).put(todo::update).delete(todo::delete),
        )
        .route("/{id}/complete", post(todo::complete))
        .route("/{id}/uncomplete", post(todo::uncomplete))
        .route("/{id}/comments", get(comment::list).post(comment::create))
}
