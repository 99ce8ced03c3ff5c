//! Route definitions for top-level comment operations.

use axum::routing::delete;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(comment::delete))
}
