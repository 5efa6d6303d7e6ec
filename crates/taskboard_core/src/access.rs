//! Ownership resolution over the board/column/task tree.
//!
//! # Responsibility
//! - Decide whether a caller transitively owns an entity by walking the
//!   Task -> Column -> Board -> owner chain.
//! - Provide ownership-scoped single-entity fetches for the service layer.
//!
//! # Invariants
//! - Resolution has no side effects.
//! - Scoping happens inside the SQL query itself; an unowned entity is
//!   indistinguishable from a missing one in the result.
//! - Every service mutation and disclosure consults this module before
//!   touching storage.

use crate::auth::UserId;
use crate::model::board::{Board, BoardId};
use crate::model::column::{Column, ColumnId};
use crate::model::task::{Task, TaskId};
use crate::repo::board_repo::{parse_board_row, BOARD_SELECT_SQL};
use crate::repo::column_repo::{parse_column_row, COLUMN_SELECT_SQL};
use crate::repo::task_repo::{parse_task_row, TASK_SELECT_SQL};
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection};

/// Ownership checks consulted before every mutation or disclosure.
///
/// The `resolve_*` methods return `None` both when the entity is absent and
/// when it exists but is not owned by the caller, so callers cannot probe
/// for the existence of other users' resources.
pub trait OwnershipResolver {
    /// Loads a board if it exists and is owned by `caller`.
    fn resolve_board(&self, caller: UserId, board_uuid: BoardId) -> RepoResult<Option<Board>>;
    /// Loads a column if its board is owned by `caller`.
    fn resolve_column(&self, caller: UserId, column_uuid: ColumnId) -> RepoResult<Option<Column>>;
    /// Loads a task if the board reached via its column is owned by `caller`.
    fn resolve_task(&self, caller: UserId, task_uuid: TaskId) -> RepoResult<Option<Task>>;
    /// Reports whether `caller` owns the chain above an existing task.
    ///
    /// Used by the task-update path, which must tell forbidden apart from
    /// not-found after it has already established that the task exists.
    fn owns_task(&self, caller: UserId, task_uuid: TaskId) -> RepoResult<bool>;
}

/// SQLite-backed ownership resolver.
pub struct SqliteOwnershipResolver<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOwnershipResolver<'conn> {
    /// Creates a resolver from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OwnershipResolver for SqliteOwnershipResolver<'_> {
    fn resolve_board(&self, caller: UserId, board_uuid: BoardId) -> RepoResult<Option<Board>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BOARD_SELECT_SQL}
             WHERE uuid = ?1 AND owner_uuid = ?2;"
        ))?;

        let mut rows = stmt.query(params![board_uuid.to_string(), caller.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_board_row(row)?));
        }

        Ok(None)
    }

    fn resolve_column(&self, caller: UserId, column_uuid: ColumnId) -> RepoResult<Option<Column>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COLUMN_SELECT_SQL}
             JOIN boards ON boards.uuid = columns.board_uuid
             WHERE columns.uuid = ?1 AND boards.owner_uuid = ?2;"
        ))?;

        let mut rows = stmt.query(params![column_uuid.to_string(), caller.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_column_row(row)?));
        }

        Ok(None)
    }

    fn resolve_task(&self, caller: UserId, task_uuid: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             JOIN columns ON columns.uuid = tasks.column_uuid
             JOIN boards ON boards.uuid = columns.board_uuid
             WHERE tasks.uuid = ?1 AND boards.owner_uuid = ?2;"
        ))?;

        let mut rows = stmt.query(params![task_uuid.to_string(), caller.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn owns_task(&self, caller: UserId, task_uuid: TaskId) -> RepoResult<bool> {
        let owned: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM tasks
                JOIN columns ON columns.uuid = tasks.column_uuid
                JOIN boards ON boards.uuid = columns.board_uuid
                WHERE tasks.uuid = ?1 AND boards.owner_uuid = ?2
            );",
            params![task_uuid.to_string(), caller.to_string()],
            |row| row.get(0),
        )?;

        Ok(owned == 1)
    }
}
