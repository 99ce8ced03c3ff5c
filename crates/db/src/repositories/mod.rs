//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod project_repo;
pub mod stats_repo;
pub mod todo_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use todo_repo::TodoRepo;
