//! Board repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for board rows.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_boards` only returns rows owned by the given caller.
//! - `delete_board` cascades to columns and tasks via foreign keys; a zero
//!   row count reports `NotFound`.

use crate::auth::UserId;
use crate::model::board::{Board, BoardId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

pub(crate) const BOARD_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    owner_uuid,
    created_at
FROM boards";

/// Repository interface for board persistence.
pub trait BoardRepository {
    /// Inserts one board row.
    fn create_board(&self, board: &Board) -> RepoResult<BoardId>;
    /// Lists boards owned by `owner`, oldest first.
    fn list_boards(&self, owner: UserId) -> RepoResult<Vec<Board>>;
    /// Deletes one board row; columns and tasks beneath it cascade.
    fn delete_board(&self, board_uuid: BoardId) -> RepoResult<()>;
}

/// SQLite-backed board repository.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn create_board(&self, board: &Board) -> RepoResult<BoardId> {
        self.conn.execute(
            "INSERT INTO boards (uuid, name, owner_uuid, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                board.uuid.to_string(),
                board.name.as_str(),
                board.owner_uuid.to_string(),
                board.created_at,
            ],
        )?;

        Ok(board.uuid)
    }

    fn list_boards(&self, owner: UserId) -> RepoResult<Vec<Board>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BOARD_SELECT_SQL}
             WHERE owner_uuid = ?1
             ORDER BY created_at ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([owner.to_string()])?;
        let mut boards = Vec::new();
        while let Some(row) = rows.next()? {
            boards.push(parse_board_row(row)?);
        }

        Ok(boards)
    }

    fn delete_board(&self, board_uuid: BoardId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM boards WHERE uuid = ?1;", [board_uuid.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(board_uuid));
        }

        Ok(())
    }
}

pub(crate) fn parse_board_row(row: &Row<'_>) -> RepoResult<Board> {
    let uuid_text: String = row.get("uuid")?;
    let owner_text: String = row.get("owner_uuid")?;

    Ok(Board {
        uuid: parse_uuid(&uuid_text, "boards.uuid")?,
        name: row.get("name")?,
        owner_uuid: parse_uuid(&owner_text, "boards.owner_uuid")?,
        created_at: row.get("created_at")?,
    })
}
