//! Core domain logic for the task board.
//! This crate is the single source of truth for ownership and tree invariants.

pub mod access;
pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use access::{OwnershipResolver, SqliteOwnershipResolver};
pub use auth::{AuthError, IdentityProvider, TokenTableProvider, UserId};
pub use logging::{default_log_level, init_logging};
pub use model::board::{Board, BoardId, BoardValidationError};
pub use model::column::{Column, ColumnId, ColumnValidationError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::board_repo::{BoardRepository, SqliteBoardRepository};
pub use repo::column_repo::{ColumnRepository, SqliteColumnRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use service::board_service::BoardService;
pub use service::column_service::ColumnService;
pub use service::task_service::{TaskService, TaskUpdate};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
