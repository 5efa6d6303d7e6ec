//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for task rows.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_tasks` is scoped through column and board ownership in SQL.
//! - `update_task` is one UPDATE statement, so a task mutation is applied
//!   all-or-nothing.
//! - `get_task` and `target_column` are deliberately unscoped; the task
//!   service uses them for the update path that distinguishes forbidden
//!   from not-found.

use crate::auth::UserId;
use crate::model::column::{Column, ColumnId};
use crate::model::task::{Task, TaskId};
use crate::repo::column_repo::{parse_column_row, COLUMN_SELECT_SQL};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

pub(crate) const TASK_SELECT_SQL: &str = "SELECT
    tasks.uuid,
    tasks.title,
    tasks.description,
    tasks.column_uuid,
    tasks.created_at,
    tasks.updated_at
FROM tasks";

/// Repository interface for task persistence.
pub trait TaskRepository {
    /// Inserts one task row. The referenced column must exist.
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    /// Lists tasks on boards owned by `owner`, oldest first.
    fn list_tasks(&self, owner: UserId) -> RepoResult<Vec<Task>>;
    /// Loads one task by id alone, regardless of ownership.
    fn get_task(&self, task_uuid: TaskId) -> RepoResult<Option<Task>>;
    /// Persists all mutable task fields in one statement.
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    /// Deletes one task row; a zero row count reports `NotFound`.
    fn delete_task(&self, task_uuid: TaskId) -> RepoResult<()>;
    /// Loads one column by id alone, for move-target validation.
    fn target_column(&self, column_uuid: ColumnId) -> RepoResult<Option<Column>>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        self.conn.execute(
            "INSERT INTO tasks (uuid, title, description, column_uuid, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                task.uuid.to_string(),
                task.title.as_str(),
                task.description.as_deref(),
                task.column_uuid.to_string(),
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(task.uuid)
    }

    fn list_tasks(&self, owner: UserId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             JOIN columns ON columns.uuid = tasks.column_uuid
             JOIN boards ON boards.uuid = columns.board_uuid
             WHERE boards.owner_uuid = ?1
             ORDER BY tasks.created_at ASC, tasks.uuid ASC;"
        ))?;

        let mut rows = stmt.query([owner.to_string()])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn get_task(&self, task_uuid: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE tasks.uuid = ?1;"))?;

        let mut rows = stmt.query([task_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                column_uuid = ?3,
                updated_at = ?4
             WHERE uuid = ?5;",
            params![
                task.title.as_str(),
                task.description.as_deref(),
                task.column_uuid.to_string(),
                task.updated_at,
                task.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(task.uuid));
        }

        Ok(())
    }

    fn delete_task(&self, task_uuid: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [task_uuid.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(task_uuid));
        }

        Ok(())
    }

    fn target_column(&self, column_uuid: ColumnId) -> RepoResult<Option<Column>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COLUMN_SELECT_SQL} WHERE columns.uuid = ?1;"))?;

        let mut rows = stmt.query([column_uuid.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_column_row(row)?));
        }

        Ok(None)
    }
}

pub(crate) fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let column_text: String = row.get("column_uuid")?;

    Ok(Task {
        uuid: parse_uuid(&uuid_text, "tasks.uuid")?,
        title: row.get("title")?,
        description: row.get("description")?,
        column_uuid: parse_uuid(&column_text, "tasks.column_uuid")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
