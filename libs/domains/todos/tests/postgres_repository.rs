//! PostgreSQL repository tests against a real database container.
//!
//! Run with `cargo test -p domain_todos -- --ignored` on a host with Docker.

use chrono::{DateTime, TimeZone, Utc};
use domain_todos::{MIGRATOR, NewToDo, PgTodoRepository, ToDoError, TodoRepository, TodoService};
use rpc::todo::v1::ReadRequest;
use test_utils::{TestDataBuilder, TestDatabase};

fn reminder(builder: &TestDataBuilder) -> DateTime<Utc> {
    Utc.timestamp_opt(builder.reminder_seconds(), 123_456_000).unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_then_find() {
    let db = TestDatabase::new(&MIGRATOR).await;
    let repo = PgTodoRepository::new(db.connector());
    let builder = TestDataBuilder::from_test_name("test_insert_then_find");

    let id = repo
        .insert(NewToDo {
            title: builder.title("main"),
            description: "with microseconds".into(),
            reminder: reminder(&builder),
        })
        .await
        .unwrap();

    let rows = repo.find_by_id(id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, builder.title("main"));
    assert_eq!(rows[0].reminder, reminder(&builder));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_report_rows() {
    let db = TestDatabase::new(&MIGRATOR).await;
    let repo = PgTodoRepository::new(db.connector());
    let builder = TestDataBuilder::from_test_name("test_update_and_delete_report_rows");

    let todo = NewToDo {
        title: builder.title("before"),
        description: String::new(),
        reminder: reminder(&builder),
    };
    let id = repo.insert(todo.clone()).await.unwrap();

    let mut changed = todo.with_id(id);
    changed.title = builder.title("after");
    assert_eq!(repo.update(changed.clone()).await.unwrap(), 1);
    assert_eq!(repo.update(changed).await.unwrap(), 1);

    assert_eq!(repo.delete(id).await.unwrap(), 1);
    assert_eq!(repo.delete(id).await.unwrap(), 0);
    assert!(repo.find_by_id(id).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_and_null_description() {
    let db = TestDatabase::new(&MIGRATOR).await;
    let repo = PgTodoRepository::new(db.connector());

    assert!(repo.list().await.unwrap().is_empty());

    db.execute("INSERT INTO todo (title, reminder) VALUES ('no description', now())")
        .await;

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].description, "");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_rows_are_internal() {
    let db = TestDatabase::new(&MIGRATOR).await;
    db.execute(
        "ALTER TABLE todo DROP CONSTRAINT todo_pkey;
         INSERT INTO todo (id, title, reminder) VALUES (1, 'a', now()), (1, 'b', now());",
    )
    .await;

    let service = TodoService::new(PgTodoRepository::new(db.connector()));
    let err = service
        .read(ReadRequest {
            api: "v1".into(),
            id: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ToDoError::Internal(_)));
}
