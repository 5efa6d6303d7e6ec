//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate ownership checks and repository calls into per-entity
//!   operation surfaces.
//! - Translate lower-layer failures into one caller-facing error taxonomy.
//!
//! # Invariants
//! - A failed ownership or validation check never reaches a storage write.
//! - `NotFound` deliberately merges "absent" and "exists but unowned" so
//!   callers cannot enumerate other users' resources. The task-update path
//!   is the one exception and reports `Forbidden`.
//! - Storage failures surface as a generic internal error; the underlying
//!   detail stays in the error source chain for logs only.

pub mod board_service;
pub mod column_service;
pub mod task_service;

use crate::model::board::BoardValidationError;
use crate::model::column::{ColumnId, ColumnValidationError};
use crate::model::task::{TaskId, TaskValidationError};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing error taxonomy shared by all services.
#[derive(Debug)]
pub enum ServiceError {
    /// Board name is empty or whitespace-only.
    BlankBoardName,
    /// Column or task title is empty or whitespace-only.
    BlankTitle,
    /// Column position is negative.
    InvalidPosition(i64),
    /// Move target column belongs to a different board than the task.
    BoardMismatch {
        task_uuid: TaskId,
        column_uuid: ColumnId,
    },
    /// Entity is absent, or exists but is not owned by the caller.
    NotFound(Uuid),
    /// Task exists but the caller does not own its board.
    Forbidden(TaskId),
    /// Unexpected storage failure. Display stays generic; detail is only
    /// reachable through the error source chain.
    Storage(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankBoardName => write!(f, "board name must not be blank"),
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::InvalidPosition(position) => {
                write!(f, "position must be non-negative, got {position}")
            }
            Self::BoardMismatch {
                task_uuid,
                column_uuid,
            } => write!(
                f,
                "column {column_uuid} does not belong to the same board as task {task_uuid}"
            ),
            Self::NotFound(id) => write!(f, "resource not found: {id}"),
            Self::Forbidden(task_uuid) => {
                write!(f, "caller does not own the board of task {task_uuid}")
            }
            Self::Storage(_) => write!(f, "internal storage error"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            // A vanished row between resolve and write is reported the same
            // way as a scoped miss.
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

impl From<BoardValidationError> for ServiceError {
    fn from(value: BoardValidationError) -> Self {
        match value {
            BoardValidationError::BlankName => Self::BlankBoardName,
        }
    }
}

impl From<ColumnValidationError> for ServiceError {
    fn from(value: ColumnValidationError) -> Self {
        match value {
            ColumnValidationError::BlankTitle => Self::BlankTitle,
            ColumnValidationError::NegativePosition(position) => Self::InvalidPosition(position),
        }
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::BlankTitle => Self::BlankTitle,
        }
    }
}
