use rusqlite::Connection;
use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    Board, BoardService, Column, ColumnService, ServiceError, SqliteBoardRepository,
    SqliteColumnRepository, SqliteOwnershipResolver, SqliteTaskRepository, TaskService,
    TaskUpdate, UserId,
};
use uuid::Uuid;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

fn boards(conn: &Connection) -> BoardService<SqliteBoardRepository<'_>, SqliteOwnershipResolver<'_>> {
    BoardService::new(
        SqliteBoardRepository::try_new(conn).unwrap(),
        SqliteOwnershipResolver::try_new(conn).unwrap(),
    )
}

fn columns(
    conn: &Connection,
) -> ColumnService<SqliteColumnRepository<'_>, SqliteOwnershipResolver<'_>> {
    ColumnService::new(
        SqliteColumnRepository::try_new(conn).unwrap(),
        SqliteOwnershipResolver::try_new(conn).unwrap(),
    )
}

fn tasks(conn: &Connection) -> TaskService<SqliteTaskRepository<'_>, SqliteOwnershipResolver<'_>> {
    TaskService::new(
        SqliteTaskRepository::try_new(conn).unwrap(),
        SqliteOwnershipResolver::try_new(conn).unwrap(),
    )
}

fn board_with_column(conn: &Connection, owner: UserId, name: &str, title: &str) -> (Board, Column) {
    let board = boards(conn).create(owner, name).unwrap();
    let column = columns(conn).create(owner, board.uuid, title, None).unwrap();
    (board, column)
}

fn move_to(column: Uuid) -> TaskUpdate {
    TaskUpdate {
        column: Some(column),
        ..TaskUpdate::default()
    }
}

#[test]
fn move_between_columns_of_same_board_succeeds() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let (board, todo) = board_with_column(&conn, caller, "Sprint 1", "Todo");
    let done = columns(&conn).create(caller, board.uuid, "Done", None).unwrap();
    let service = tasks(&conn);

    let task = service.create(caller, todo.uuid, "Write spec", None).unwrap();
    let moved = service.update(caller, task.uuid, move_to(done.uuid)).unwrap();

    assert_eq!(moved.column_uuid, done.uuid);
    assert!(moved.updated_at > task.updated_at);

    // A subsequent read reflects the new column.
    let listed = service.list(caller).unwrap();
    assert_eq!(listed[0].column_uuid, done.uuid);
}

#[test]
fn move_to_column_of_another_board_is_rejected() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let (_, source) = board_with_column(&conn, caller, "Board 1", "C1");
    let (_, foreign) = board_with_column(&conn, caller, "Board 2", "C2");
    let service = tasks(&conn);

    let task = service.create(caller, source.uuid, "Stuck here", None).unwrap();
    let err = service
        .update(caller, task.uuid, move_to(foreign.uuid))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::BoardMismatch { task_uuid, column_uuid }
            if task_uuid == task.uuid && column_uuid == foreign.uuid
    ));

    // Task is fully unchanged.
    let listed = service.list(caller).unwrap();
    assert_eq!(listed, vec![task]);
}

#[test]
fn rejected_move_does_not_apply_other_field_updates() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let (_, source) = board_with_column(&conn, caller, "Board 1", "C1");
    let (_, foreign) = board_with_column(&conn, caller, "Board 2", "C2");
    let service = tasks(&conn);

    let task = service
        .create(caller, source.uuid, "Original", Some("keep".to_string()))
        .unwrap();
    let err = service
        .update(
            caller,
            task.uuid,
            TaskUpdate {
                title: Some("Should not land".to_string()),
                description: Some("should not land either".to_string()),
                column: Some(foreign.uuid),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::BoardMismatch { .. }));

    let listed = service.list(caller).unwrap();
    assert_eq!(listed, vec![task]);
}

#[test]
fn move_to_missing_column_reports_not_found() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let (_, source) = board_with_column(&conn, caller, "Board 1", "C1");
    let service = tasks(&conn);

    let task = service.create(caller, source.uuid, "Lost target", None).unwrap();
    let missing = Uuid::new_v4();
    let err = service.update(caller, task.uuid, move_to(missing)).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == missing));
}

#[test]
fn move_combined_with_field_updates_applies_everything() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let (board, todo) = board_with_column(&conn, caller, "Sprint 1", "Todo");
    let done = columns(&conn).create(caller, board.uuid, "Done", None).unwrap();
    let service = tasks(&conn);

    let task = service.create(caller, todo.uuid, "Draft", None).unwrap();
    let updated = service
        .update(
            caller,
            task.uuid,
            TaskUpdate {
                title: Some("Shipped".to_string()),
                description: Some("landed in review".to_string()),
                column: Some(done.uuid),
            },
        )
        .unwrap();

    assert_eq!(updated.column_uuid, done.uuid);
    assert_eq!(updated.title, "Shipped");
    assert_eq!(updated.description.as_deref(), Some("landed in review"));
}

#[test]
fn board_walkthrough_scenario() {
    let conn = setup();
    let user_a = Uuid::new_v4();

    let board = boards(&conn).create(user_a, "Sprint 1").unwrap();
    let todo = columns(&conn)
        .create(user_a, board.uuid, "Todo", Some(0))
        .unwrap();
    let task = tasks(&conn)
        .create(user_a, todo.uuid, "Write spec", None)
        .unwrap();
    let done = columns(&conn).create(user_a, board.uuid, "Done", None).unwrap();

    tasks(&conn)
        .update(user_a, task.uuid, move_to(done.uuid))
        .unwrap();

    let listed = tasks(&conn).list(user_a).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].column_uuid, done.uuid);
}
