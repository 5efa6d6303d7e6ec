//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    BoardService, ColumnService, IdentityProvider, SqliteBoardRepository, SqliteColumnRepository,
    SqliteOwnershipResolver, SqliteTaskRepository, TaskService, TokenTableProvider,
};
use uuid::Uuid;

fn main() {
    println!("taskboard_core version={}", taskboard_core::core_version());

    if let Err(err) = smoke() {
        eprintln!("smoke check failed: {err}");
        std::process::exit(1);
    }
    println!("smoke check ok");
}

// Walks one board -> column -> task round trip against an in-memory store
// to validate core crate wiring without any server runtime.
fn smoke() -> Result<(), Box<dyn std::error::Error>> {
    let mut identities = TokenTableProvider::new();
    identities.register("demo-token", Uuid::new_v4());
    let caller = identities.authenticate("demo-token")?;

    let conn = open_db_in_memory()?;
    let boards = BoardService::new(
        SqliteBoardRepository::try_new(&conn)?,
        SqliteOwnershipResolver::try_new(&conn)?,
    );
    let columns = ColumnService::new(
        SqliteColumnRepository::try_new(&conn)?,
        SqliteOwnershipResolver::try_new(&conn)?,
    );
    let tasks = TaskService::new(
        SqliteTaskRepository::try_new(&conn)?,
        SqliteOwnershipResolver::try_new(&conn)?,
    );

    let board = boards.create(caller, "Sprint 1")?;
    let column = columns.create(caller, board.uuid, "Todo", None)?;
    let task = tasks.create(caller, column.uuid, "Write spec", None)?;

    println!(
        "created board={} column={} task={}",
        board.uuid, column.uuid, task.uuid
    );
    Ok(())
}
