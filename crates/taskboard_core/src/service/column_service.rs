//! Column use-case service.
//!
//! # Responsibility
//! - Provide list/create/delete entry points for columns.
//! - Delegate ownership decisions to the resolver before touching storage.
//!
//! # Invariants
//! - A column attaches to exactly one board for its lifetime.
//! - `create` and `delete` report the same `NotFound` for absent and
//!   unowned parents/targets.

use crate::access::OwnershipResolver;
use crate::auth::UserId;
use crate::model::board::BoardId;
use crate::model::column::{Column, ColumnId};
use crate::repo::column_repo::ColumnRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Use-case service for column operations.
pub struct ColumnService<R: ColumnRepository, O: OwnershipResolver> {
    repo: R,
    resolver: O,
}

impl<R: ColumnRepository, O: OwnershipResolver> ColumnService<R, O> {
    /// Creates a service from repository and resolver implementations.
    pub fn new(repo: R, resolver: O) -> Self {
        Self { repo, resolver }
    }

    /// Lists all columns on boards owned by `caller`, by position.
    pub fn list(&self, caller: UserId) -> ServiceResult<Vec<Column>> {
        self.repo.list_columns(caller).map_err(Into::into)
    }

    /// Creates a column on a board owned by `caller`.
    ///
    /// `position` defaults to 0 when not provided.
    ///
    /// # Errors
    /// - `NotFound` when the board is absent or not owned by `caller`.
    /// - `BlankTitle` / `InvalidPosition` on malformed input.
    pub fn create(
        &self,
        caller: UserId,
        board_uuid: BoardId,
        title: impl Into<String>,
        position: Option<i64>,
    ) -> ServiceResult<Column> {
        let board = self
            .resolver
            .resolve_board(caller, board_uuid)?
            .ok_or(ServiceError::NotFound(board_uuid))?;

        let column = Column::new(board.uuid, title, position.unwrap_or(0))?;
        self.repo.create_column(&column)?;
        info!(
            "event=column_create module=service status=ok column={} board={}",
            column.uuid, board.uuid
        );
        Ok(column)
    }

    /// Deletes a column on a board owned by `caller`; tasks cascade.
    ///
    /// # Errors
    /// - `NotFound` when the column is absent or not owned by `caller`.
    pub fn delete(&self, caller: UserId, column_uuid: ColumnId) -> ServiceResult<()> {
        self.resolver
            .resolve_column(caller, column_uuid)?
            .ok_or(ServiceError::NotFound(column_uuid))?;

        self.repo.delete_column(column_uuid)?;
        info!(
            "event=column_delete module=service status=ok column={column_uuid}"
        );
        Ok(())
    }
}
