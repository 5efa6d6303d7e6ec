//! Task domain model.
//!
//! # Responsibility
//! - Define the leaf work item of the ownership tree.
//!
//! # Invariants
//! - `column_uuid` is the only mutable relation; reassignment is restricted
//!   to columns of the same board (enforced by the task service).
//! - `updated_at` strictly increases on every mutation.

use crate::model::column::ColumnId;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Validation failures for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Leaf work item belonging to exactly one column at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable task id.
    pub uuid: TaskId,
    /// User-facing task title, non-blank.
    pub title: String,
    /// Optional free-form body.
    pub description: Option<String>,
    /// Serialized as `column` to match external schema naming.
    #[serde(rename = "column")]
    pub column_uuid: ColumnId,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms of the most recent mutation. Strictly increasing.
    pub updated_at: i64,
}

impl Task {
    /// Creates a new task attached to `column`.
    ///
    /// The title is trimmed before storage; a blank title is rejected.
    pub fn new(
        column: ColumnId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TaskValidationError> {
        let title = normalize_title(title.into())?;
        let created_at = now_epoch_ms();
        Ok(Self {
            uuid: Uuid::new_v4(),
            title,
            description,
            column_uuid: column,
            created_at,
            updated_at: created_at,
        })
    }

    /// Refreshes `updated_at` for a mutation.
    ///
    /// The wall clock may not advance between rapid mutations, so the
    /// timestamp is bumped by one when it would otherwise stand still.
    pub fn touch(&mut self) {
        let now = now_epoch_ms();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + 1
        };
    }
}

pub(crate) fn normalize_title(title: String) -> Result<String, TaskValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::BlankTitle);
    }
    Ok(trimmed.to_string())
}
