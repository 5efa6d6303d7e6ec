//! Board use-case service.
//!
//! # Responsibility
//! - Provide list/create/delete entry points for boards.
//! - Delegate ownership decisions to the resolver before touching storage.
//!
//! # Invariants
//! - The caller of `create` becomes the owner; ownership never changes.
//! - `delete` reports the same `NotFound` for absent and unowned boards.

use crate::access::OwnershipResolver;
use crate::auth::UserId;
use crate::model::board::{Board, BoardId};
use crate::repo::board_repo::BoardRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;

/// Use-case service for board operations.
pub struct BoardService<R: BoardRepository, O: OwnershipResolver> {
    repo: R,
    resolver: O,
}

impl<R: BoardRepository, O: OwnershipResolver> BoardService<R, O> {
    /// Creates a service from repository and resolver implementations.
    pub fn new(repo: R, resolver: O) -> Self {
        Self { repo, resolver }
    }

    /// Lists all boards owned by `caller`, oldest first.
    pub fn list(&self, caller: UserId) -> ServiceResult<Vec<Board>> {
        self.repo.list_boards(caller).map_err(Into::into)
    }

    /// Creates a board owned by `caller`.
    ///
    /// # Errors
    /// - `BlankBoardName` when the name is empty after trimming.
    pub fn create(&self, caller: UserId, name: impl Into<String>) -> ServiceResult<Board> {
        let board = Board::new(caller, name)?;
        self.repo.create_board(&board)?;
        info!(
            "event=board_create module=service status=ok board={}",
            board.uuid
        );
        Ok(board)
    }

    /// Deletes a board owned by `caller`; columns and tasks cascade.
    ///
    /// # Errors
    /// - `NotFound` when the board is absent or not owned by `caller`.
    pub fn delete(&self, caller: UserId, board_uuid: BoardId) -> ServiceResult<()> {
        self.resolver
            .resolve_board(caller, board_uuid)?
            .ok_or(ServiceError::NotFound(board_uuid))?;

        self.repo.delete_board(board_uuid)?;
        info!(
            "event=board_delete module=service status=ok board={board_uuid}"
        );
        Ok(())
    }
}
