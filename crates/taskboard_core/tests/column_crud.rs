use rusqlite::Connection;
use taskboard_core::db::open_db_in_memory;
use taskboard_core::{
    Board, BoardService, ColumnService, ServiceError, SqliteBoardRepository,
    SqliteColumnRepository, SqliteOwnershipResolver, UserId,
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

fn create_board(conn: &Connection, owner: UserId, name: &str) -> Board {
    boards(conn).create(owner, name).unwrap()
}

#[test]
fn create_attaches_column_to_owned_board() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");

    let service = columns(&conn);
    let column = service.create(caller, board.uuid, "Todo", None).unwrap();

    assert_eq!(column.board_uuid, board.uuid);
    assert_eq!(column.position, 0);

    let listed = service.list(caller).unwrap();
    assert_eq!(listed, vec![column]);
}

#[test]
fn create_on_foreign_board_reports_not_found() {
    let conn = setup();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let board = create_board(&conn, owner, "Private");

    let err = columns(&conn)
        .create(intruder, board.uuid, "Sneaky", None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == board.uuid));
}

#[test]
fn create_rejects_blank_title() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");

    let err = columns(&conn)
        .create(caller, board.uuid, "  ", None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::BlankTitle));
}

#[test]
fn create_rejects_negative_position() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");

    let err = columns(&conn)
        .create(caller, board.uuid, "Todo", Some(-3))
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidPosition(-3)));
}

#[test]
fn duplicate_positions_are_allowed_between_siblings() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");
    let service = columns(&conn);

    service.create(caller, board.uuid, "Todo", Some(1)).unwrap();
    service.create(caller, board.uuid, "Doing", Some(1)).unwrap();

    assert_eq!(service.list(caller).unwrap().len(), 2);
}

#[test]
fn list_orders_by_position_then_uuid() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");
    let service = columns(&conn);

    service.create(caller, board.uuid, "Done", Some(2)).unwrap();
    service.create(caller, board.uuid, "Todo", Some(0)).unwrap();
    service.create(caller, board.uuid, "Doing", Some(1)).unwrap();

    let titles: Vec<String> = service
        .list(caller)
        .unwrap()
        .into_iter()
        .map(|column| column.title)
        .collect();
    assert_eq!(titles, vec!["Todo", "Doing", "Done"]);
}

#[test]
fn delete_removes_column() {
    let conn = setup();
    let caller = Uuid::new_v4();
    let board = create_board(&conn, caller, "Sprint 1");
    let service = columns(&conn);

    let column = service.create(caller, board.uuid, "Todo", None).unwrap();
    service.delete(caller, column.uuid).unwrap();

    assert!(service.list(caller).unwrap().is_empty());
}

#[test]
fn delete_of_missing_column_reports_not_found() {
    let conn = setup();
    let missing = Uuid::new_v4();

    let err = columns(&conn).delete(Uuid::new_v4(), missing).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == missing));
}
