//! Query-parameter resolution for the todo list endpoint.
//!
//! Parameters arrive as raw strings so that malformed values can be
//! silently dropped instead of failing extraction: an unparsable
//! `project_id` or `completed` simply skips that predicate, and an invalid
//! or out-of-range `limit`/`offset` falls back to the default (not the
//! nearest bound).

use punchlist_db::models::todo::TodoFilter;
use serde::Deserialize;

/// Raw query parameters for `GET /todos`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoListParams {
    pub project_id: Option<String>,
    pub completed: Option<String>,
    pub priority: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl TodoListParams {
    /// Resolve raw parameters into a typed [`TodoFilter`].
    pub fn resolve(self) -> TodoFilter {
        let mut filter = TodoFilter::default();

        if let Some(raw) = self.project_id {
            if let Ok(id) = raw.parse() {
                filter.project_id = Some(id);
            }
        }
        if let Some(raw) = self.completed {
            if let Ok(flag) = raw.parse() {
                filter.completed = Some(flag);
            }
        }
        filter.priority = self.priority.filter(|s| !s.is_empty());
        filter.author = self.author.filter(|s| !s.is_empty());
        filter.search = self.search.filter(|s| !s.is_empty());

        if let Some(raw) = self.limit {
            if let Ok(limit) = raw.parse::<i64>() {
                if (1..=TodoFilter::MAX_LIMIT).contains(&limit) {
                    filter.limit = limit;
                }
            }
        }
        if let Some(raw) = self.offset {
            if let Ok(offset) = raw.parse::<i64>() {
                if offset >= 0 {
                    filter.offset = offset;
                }
            }
        }

        filter
    }
}
