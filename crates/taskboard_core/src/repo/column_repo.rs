//! Column repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for column rows.
//! - Keep SQL details and sibling ordering inside the repository boundary.
//!
//! # Invariants
//! - `list_columns` is scoped through the owning board in SQL.
//! - Column listing is deterministic: `position ASC, uuid ASC`.
//! - `delete_column` cascades to tasks via foreign keys; a zero row count
//!   reports `NotFound`.

use crate::auth::UserId;
use crate::model::column::{Column, ColumnId};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

pub(crate) const COLUMN_SELECT_SQL: &str = "SELECT
    columns.uuid,
    columns.title,
    columns.board_uuid,
    columns.position
FROM columns";

/// Repository interface for column persistence.
pub trait ColumnRepository {
    /// Inserts one column row. The referenced board must exist.
    fn create_column(&self, column: &Column) -> RepoResult<ColumnId>;
    /// Lists columns on boards owned by `owner`.
    fn list_columns(&self, owner: UserId) -> RepoResult<Vec<Column>>;
    /// Deletes one column row; tasks beneath it cascade.
    fn delete_column(&self, column_uuid: ColumnId) -> RepoResult<()>;
}

/// SQLite-backed column repository.
pub struct SqliteColumnRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteColumnRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ColumnRepository for SqliteColumnRepository<'_> {
    fn create_column(&self, column: &Column) -> RepoResult<ColumnId> {
        self.conn.execute(
            "INSERT INTO columns (uuid, title, board_uuid, position)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                column.uuid.to_string(),
                column.title.as_str(),
                column.board_uuid.to_string(),
                column.position,
            ],
        )?;

        Ok(column.uuid)
    }

    fn list_columns(&self, owner: UserId) -> RepoResult<Vec<Column>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COLUMN_SELECT_SQL}
             JOIN boards ON boards.uuid = columns.board_uuid
             WHERE boards.owner_uuid = ?1
             ORDER BY columns.position ASC, columns.uuid ASC;"
        ))?;

        let mut rows = stmt.query([owner.to_string()])?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next()? {
            columns.push(parse_column_row(row)?);
        }

        Ok(columns)
    }

    fn delete_column(&self, column_uuid: ColumnId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM columns WHERE uuid = ?1;",
            [column_uuid.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(column_uuid));
        }

        Ok(())
    }
}

pub(crate) fn parse_column_row(row: &Row<'_>) -> RepoResult<Column> {
    let uuid_text: String = row.get("uuid")?;
    let board_text: String = row.get("board_uuid")?;

    let position: i64 = row.get("position")?;
    if position < 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid position value `{position}` in columns.position"
        )));
    }

    Ok(Column {
        uuid: parse_uuid(&uuid_text, "columns.uuid")?,
        title: row.get("title")?,
        board_uuid: parse_uuid(&board_text, "columns.board_uuid")?,
        position,
    })
}
