use diesel::prelude::*;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let dir = {
        let test_db = common::TestDb::new("test_connection.db");
        let conn = test_db.pool().get();
        assert!(conn.is_ok());
        assert!(test_db.path().join("test_connection.db").exists());
        test_db.path().to_path_buf()
    };

    assert!(!dir.exists());
}

#[test]
fn test_pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new("test_foreign_keys.db");
    let mut conn = test_db.pool().get().expect("connection");

    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeys>(&mut conn)
        .expect("pragma query");

    assert_eq!(pragma.foreign_keys, 1);
}
