use nue::prelude::*;
use nue::storage::DatabaseDescription;
use pretty_assertions::assert_eq;

fn interpreter() -> Interpreter<MemoryEngine> {
    Interpreter::new(MemoryEngine::new())
}

fn names(outcome: &Outcome, column: &str) -> Vec<String> {
    outcome
        .rows()
        .expect("expected rows")
        .iter()
        .map(|row| row.get(column).cloned().flatten().unwrap_or_default())
        .collect()
}

async fn seeded(interpreter: &Interpreter<MemoryEngine>) -> Session<MemoryEngine> {
    let mut session = interpreter.session();
    let response = session
        .run_batch(
            "CREATE DATABASE shop; INIT shop; \
             CREATE TABLE users (id as primary_key, name, age); \
             INSERT INTO users (id, name, age) VALUES (1, 'Ann', 34); \
             INSERT INTO users VALUES (2, 'Bob', 9); \
             INSERT users 3, 'Cid; Jr.', 21",
        )
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    session
}

#[tokio::test]
async fn test_init_then_create_table() {
    let interpreter = interpreter();
    let mut setup = interpreter.session();
    assert!(setup.run_batch("CREATE DATABASE db1").await.is_ok());

    let mut session = interpreter.session();
    let response = session
        .run_batch("INIT db1;CREATE TABLE t (id as primary_key, name)")
        .await;

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.results[0], Outcome::message("Using database: db1"));
    assert_eq!(session.active_database(), Some("db1"));

    let described = session.execute("DESCRIBE TABLE t").await.unwrap();
    match described {
        Outcome::Table(table) => {
            assert_eq!(table.primary_key.as_deref(), Some("id"));
            assert_eq!(table.columns, vec!["name"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_second_of_three_fails_keeps_partial_results() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let response = session
        .run_batch(
            "INSERT users 4, 'Dee', 50; INSERT users 1, 'Dup', 1; INSERT users 5, 'Eve', 60",
        )
        .await;

    assert_eq!(response.status, Status::Error);
    assert_eq!(response.results, vec![Outcome::Affected { affected: 1 }]);
    let failure = response.error.unwrap();
    assert_eq!(failure.statement, 1);
    assert!(failure.message.contains("Duplicate"));

    // The third statement never ran; the first is not rolled back
    let rows = session.execute("FIND id FROM users ORDER BY id").await.unwrap();
    assert_eq!(names(&rows, "id"), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn test_table_verbs_need_an_active_database() {
    let interpreter = interpreter();
    let mut session = interpreter.session();

    for statement in [
        "CREATE TABLE t (id)",
        "INSERT t 1",
        "FIND * FROM t",
        "DESCRIBE TABLE t",
        "DROP TABLE t",
        "DELETE FROM t WHERE id = 1",
        "UPDATE t SET a = 1 WHERE id = 1",
    ] {
        let err = session.execute(statement).await.unwrap_err();
        assert!(
            matches!(err, NueError::NoActiveDatabase),
            "{}: {:?}",
            statement,
            err
        );
    }
}

#[tokio::test]
async fn test_failed_init_keeps_previous_database() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let err = session.execute("INIT nowhere").await.unwrap_err();
    assert_eq!(err.to_string(), "Database nowhere doesn't exist.");
    assert_eq!(session.active_database(), Some("shop"));
}

#[tokio::test]
async fn test_sessions_do_not_share_active_database() {
    let interpreter = interpreter();
    let _seeded = seeded(&interpreter).await;

    let mut other = interpreter.session();
    assert_eq!(other.active_database(), None);
    assert!(matches!(
        other.execute("FIND * FROM users").await.unwrap_err(),
        NueError::NoActiveDatabase
    ));
}

#[tokio::test]
async fn test_find_primary_key_in_list_and_paging() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let outcome = session
        .execute("FIND name FROM users WHERE PRIMARY_KEY IN (1, '3')")
        .await
        .unwrap();
    assert_eq!(names(&outcome, "name"), vec!["Ann", "Cid; Jr."]);

    let outcome = session
        .execute("FIND * FROM users WHERE age > 5 ORDER BY age DESC LIMIT 1 OFFSET 1")
        .await
        .unwrap();
    assert_eq!(names(&outcome, "name"), vec!["Cid; Jr."]);
}

#[tokio::test]
async fn test_update_and_delete() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let response = session
        .run_batch(
            "UPDATE users SET name='Ann, B.', age=35 WHERE id=1; \
             DELETE FROM users WHERE name NOT LIKE 'a%'; \
             FIND name, age FROM users",
        )
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(response.results[0], Outcome::Affected { affected: 1 });
    assert_eq!(response.results[1], Outcome::Affected { affected: 2 });
    assert_eq!(names(&response.results[2], "name"), vec!["Ann, B."]);
    assert_eq!(names(&response.results[2], "age"), vec!["35"]);
}

#[tokio::test]
async fn test_delete_without_condition_is_rejected() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let err = session.execute("DELETE FROM users").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "You must specify a condition value for WHERE clause."
    );
}

#[tokio::test]
async fn test_insert_with_dangling_values() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let err = session
        .execute("INSERT INTO users (id, name) VALUES")
        .await
        .unwrap_err();
    assert!(matches!(err, NueError::MissingValuesClause));
}

#[tokio::test]
async fn test_show_lists_catalog() {
    let interpreter = interpreter();
    let mut session = interpreter.session();
    let response = session
        .run_batch("CREATE DB my_test_db; CREATE DB production; CREATE DB test2")
        .await;
    assert!(response.is_ok(), "{:?}", response.error);

    let all = session.execute("SHOW").await.unwrap();
    assert_eq!(names(&all, "name"), vec!["my_test_db", "production", "test2"]);

    let filtered = session.execute("SHOW DATABASES LIKE '%test%'").await.unwrap();
    assert_eq!(names(&filtered, "name"), vec!["my_test_db", "test2"]);
}

#[tokio::test]
async fn test_create_database_rejects_parameters() {
    let interpreter = interpreter();
    let mut session = interpreter.session();

    let err = session.execute("CREATE DATABASE shop (a, b)").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected parameters on \"CREATE DATABASE\" instruction."
    );
}

#[tokio::test]
async fn test_drop_active_database_clears_selection() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    session.execute("DROP DATABASE shop").await.unwrap();
    assert_eq!(session.active_database(), None);

    let shown = session.execute("SHOW").await.unwrap();
    assert!(shown.rows().unwrap().is_empty());
    assert!(matches!(
        session.execute("INIT shop").await.unwrap_err(),
        NueError::DatabaseNotFound(_)
    ));
}

#[tokio::test]
async fn test_describe_database() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    match session.execute("LS DB shop").await.unwrap() {
        Outcome::Database(DatabaseDescription {
            database, tables, ..
        }) => {
            assert_eq!(database, "shop");
            assert_eq!(tables.len(), 1);
            assert_eq!(tables[0].rows, 3);
        }
        other => panic!("unexpected {:?}", other),
    }

    assert!(matches!(
        session.execute("DESCRIBE DATABASE").await.unwrap_err(),
        NueError::MissingParameters(_)
    ));
}

#[tokio::test]
async fn test_request_headers_and_empty_body() {
    let dir = tempfile::tempdir().unwrap();
    let interpreter = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = interpreter.session();

    let mut headers = Headers::new();
    headers.insert("handshake".to_string(), "client-1".to_string());
    let response = session.handle_request(&headers, None).await;
    assert_eq!(response, BatchResponse::ok(vec![]));

    let response = session.handle_request(&headers, Some("")).await;
    assert_eq!(response, BatchResponse::ok(vec![]));

    headers.insert("SAVE".to_string(), String::new());
    let response = session
        .handle_request(
            &headers,
            Some("CREATE DB shop; INIT shop; CREATE TB users id as primary_key, name; INSERT users 1, 'Ann'"),
        )
        .await;
    assert!(response.is_ok(), "{:?}", response.error);

    // A fresh engine over the same directory sees the flushed state
    let reopened = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = reopened.session();
    let response = session
        .run_batch("SHOW; INIT shop; FIND name FROM users")
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(names(&response.results[0], "name"), vec!["shop"]);
    assert_eq!(names(&response.results[2], "name"), vec!["Ann"]);
}

#[tokio::test]
async fn test_unknown_verb_and_empty_statement() {
    let interpreter = interpreter();
    let mut session = interpreter.session();

    let response = session.run_batch("SELECT * FROM users").await;
    assert_eq!(response.status, Status::Error);
    assert!(response.error.unwrap().message.starts_with("Invalid command action"));

    let response = session.run_batch("SHOW;;SHOW").await;
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.error.unwrap().statement, 1);
}

#[tokio::test]
async fn test_join_through_interpreter() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let response = session
        .run_batch(
            "CREATE TABLE orders (oid as primary_key, user_id, total); \
             INSERT orders 10, 1, 99; INSERT orders 11, 3, 5; \
             FIND name, orders.total FROM users JOIN orders ON users.id = orders.user_id ORDER BY orders.total",
        )
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    let rows = &response.results[3];
    assert_eq!(names(rows, "name"), vec!["Cid; Jr.", "Ann"]);
    assert_eq!(names(rows, "orders.total"), vec!["5", "99"]);
}

#[tokio::test]
async fn test_init_flushes_previous_database() {
    let dir = tempfile::tempdir().unwrap();
    let interpreter = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = interpreter.session();
    let response = session
        .run_batch(
            "CREATE DB first; CREATE DB second; INIT first; \
             CREATE TABLE users (id as primary_key, name); INSERT users 1, 'Ann'; \
             INIT second",
        )
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(session.active_database(), Some("second"));

    // No Save header was sent: only the switch wrote `first` to disk
    let reopened = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = reopened.session();
    let response = session.run_batch("INIT first; FIND name FROM users").await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(names(&response.results[1], "name"), vec!["Ann"]);
}

#[tokio::test]
async fn test_drop_table() {
    let interpreter = interpreter();
    let mut session = seeded(&interpreter).await;

    let outcome = session.execute("DROP TABLE users").await.unwrap();
    assert_eq!(outcome, Outcome::message("Table users dropped."));

    assert!(matches!(
        session.execute("FIND * FROM users").await.unwrap_err(),
        NueError::Storage(StorageError::TableNotFound(_))
    ));
    assert!(matches!(
        session.execute("DROP TB users").await.unwrap_err(),
        NueError::Storage(StorageError::TableNotFound(_))
    ));

    // The name is free again
    let response = session
        .run_batch("CREATE TB users (id as primary_key); INSERT users 1; FIND * FROM users")
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(names(&response.results[2], "id"), vec!["1"]);
}

#[tokio::test]
async fn test_save_header_flushes_after_failed_batch() {
    let dir = tempfile::tempdir().unwrap();
    let interpreter = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = interpreter.session();

    let mut headers = Headers::new();
    headers.insert("Save".to_string(), String::new());
    let response = session
        .handle_request(
            &headers,
            Some(
                "CREATE DB shop; INIT shop; CREATE TB users (id as primary_key, name); \
                 INSERT users 1, 'Ann'; INSERT users 1, 'Dup'",
            ),
        )
        .await;
    assert_eq!(response.status, Status::Error);
    assert_eq!(response.results.len(), 4);
    assert_eq!(response.error.unwrap().statement, 4);

    let reopened = Interpreter::new(MemoryEngine::persistent(dir.path()));
    let mut session = reopened.session();
    let response = session
        .run_batch("SHOW; INIT shop; FIND name FROM users")
        .await;
    assert!(response.is_ok(), "{:?}", response.error);
    assert_eq!(names(&response.results[0], "name"), vec!["shop"]);
    assert_eq!(names(&response.results[2], "name"), vec!["Ann"]);
}
