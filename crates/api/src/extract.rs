//! Request-body extraction.
//!
//! Wraps [`axum::Json`] so that body rejections (malformed JSON, wrong
//! field types) come back as a 400 with the standard error envelope
//! instead of axum's plain-text 422.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError::BadRequest`].
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
