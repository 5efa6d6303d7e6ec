//! Task use-case service, including the column-move validator.
//!
//! # Responsibility
//! - Provide list/create/delete/update entry points for tasks.
//! - Validate column reassignment against the same-board invariant.
//!
//! # Invariants
//! - A move target must sit on the same board as the task's current column;
//!   a rejected move applies no change at all.
//! - The update path resolves the task by id first and reports `Forbidden`
//!   when the caller does not own its board, unlike every other path which
//!   merges that case into `NotFound`.
//! - `updated_at` strictly increases on every successful update.

use crate::access::OwnershipResolver;
use crate::auth::UserId;
use crate::model::column::ColumnId;
use crate::model::task::{normalize_title, Task, TaskId};
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use crate::service::{ServiceError, ServiceResult};
use log::{info, warn};

/// Partial update for one task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title, non-blank when provided.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Move target column. Must sit on the task's current board.
    pub column: Option<ColumnId>,
}

/// Use-case service for task operations.
pub struct TaskService<R: TaskRepository, O: OwnershipResolver> {
    repo: R,
    resolver: O,
}

impl<R: TaskRepository, O: OwnershipResolver> TaskService<R, O> {
    /// Creates a service from repository and resolver implementations.
    pub fn new(repo: R, resolver: O) -> Self {
        Self { repo, resolver }
    }

    /// Lists all tasks on boards owned by `caller`, oldest first.
    pub fn list(&self, caller: UserId) -> ServiceResult<Vec<Task>> {
        self.repo.list_tasks(caller).map_err(Into::into)
    }

    /// Creates a task on a column whose board is owned by `caller`.
    ///
    /// # Errors
    /// - `NotFound` when the column is absent or not owned by `caller`.
    /// - `BlankTitle` on malformed input.
    pub fn create(
        &self,
        caller: UserId,
        column_uuid: ColumnId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> ServiceResult<Task> {
        let column = self
            .resolver
            .resolve_column(caller, column_uuid)?
            .ok_or(ServiceError::NotFound(column_uuid))?;

        let task = Task::new(column.uuid, title, description)?;
        self.repo.create_task(&task)?;
        info!(
            "event=task_create module=service status=ok task={} column={}",
            task.uuid, column.uuid
        );
        Ok(task)
    }

    /// Deletes a task whose board is owned by `caller`.
    ///
    /// # Errors
    /// - `NotFound` when the task is absent or not owned by `caller`.
    pub fn delete(&self, caller: UserId, task_uuid: TaskId) -> ServiceResult<()> {
        self.resolver
            .resolve_task(caller, task_uuid)?
            .ok_or(ServiceError::NotFound(task_uuid))?;

        self.repo.delete_task(task_uuid)?;
        info!(
            "event=task_delete module=service status=ok task={task_uuid}"
        );
        Ok(())
    }

    /// Updates task fields and optionally moves the task to another column.
    ///
    /// All changes are validated first and persisted with one statement, so
    /// a rejected move never partially updates other fields.
    ///
    /// # Errors
    /// - `NotFound` when the task does not exist at all, or when a requested
    ///   move target column does not exist.
    /// - `Forbidden` when the task exists but `caller` does not own its
    ///   board.
    /// - `BoardMismatch` when the move target sits on a different board.
    /// - `BlankTitle` when a provided title is empty after trimming.
    pub fn update(
        &self,
        caller: UserId,
        task_uuid: TaskId,
        update: TaskUpdate,
    ) -> ServiceResult<Task> {
        let mut task = self
            .repo
            .get_task(task_uuid)?
            .ok_or(ServiceError::NotFound(task_uuid))?;

        if !self.resolver.owns_task(caller, task_uuid)? {
            warn!(
                "event=task_update module=service status=rejected reason=forbidden task={task_uuid}"
            );
            return Err(ServiceError::Forbidden(task_uuid));
        }

        if let Some(target_uuid) = update.column {
            self.validate_move(&mut task, target_uuid)?;
        }

        if let Some(title) = update.title {
            task.title = normalize_title(title)?;
        }
        if let Some(description) = update.description {
            task.description = Some(description);
        }

        task.touch();
        self.repo.update_task(&task)?;
        info!(
            "event=task_update module=service status=ok task={} column={}",
            task.uuid, task.column_uuid
        );
        Ok(task)
    }

    /// Applies a column reassignment to the in-memory task after checking
    /// the same-board invariant. Nothing is persisted here.
    fn validate_move(&self, task: &mut Task, target_uuid: ColumnId) -> ServiceResult<()> {
        let target = self
            .repo
            .target_column(target_uuid)?
            .ok_or(ServiceError::NotFound(target_uuid))?;

        let current = self
            .repo
            .target_column(task.column_uuid)?
            .ok_or_else(|| {
                // Foreign keys guarantee the current column exists; its
                // absence means the store broke referential integrity.
                ServiceError::Storage(RepoError::InvalidData(format!(
                    "task {} references missing column {}",
                    task.uuid, task.column_uuid
                )))
            })?;

        if target.board_uuid != current.board_uuid {
            warn!(
                "event=task_move module=service status=rejected reason=board_mismatch task={} target={}",
                task.uuid, target.uuid
            );
            return Err(ServiceError::BoardMismatch {
                task_uuid: task.uuid,
                column_uuid: target.uuid,
            });
        }

        task.column_uuid = target.uuid;
        Ok(())
    }
}
