use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::postgres::{Connector, Migrator};
use sqlx::FromRow;
use tracing::debug;

use crate::error::{ToDoError, TodoResult};
use crate::models::{NewToDo, ToDo};
use crate::repository::TodoRepository;

/// Embedded migrations creating the `todo` table
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, FromRow)]
struct ToDoRow {
    id: i64,
    title: String,
    description: Option<String>,
    reminder: DateTime<Utc>,
}

impl From<ToDoRow> for ToDo {
    fn from(row: ToDoRow) -> Self {
        ToDo {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            reminder: row.reminder,
        }
    }
}

/// PostgreSQL implementation of [`TodoRepository`].
///
/// Every call checks a connection out of the pool and gives it back when the
/// call returns or is cancelled.
#[derive(Clone)]
pub struct PgTodoRepository {
    connector: Connector,
}

impl PgTodoRepository {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }
}

fn query_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> ToDoError {
    move |e| ToDoError::Internal(format!("failed to {} ToDo: {}", action, e))
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn insert(&self, todo: NewToDo) -> TodoResult<i64> {
        let mut conn = self.connector.acquire().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO todo (title, description, reminder) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.reminder)
        .fetch_one(conn.connection())
        .await
        .map_err(query_error("insert"))?;

        debug!(todo_id = id, "Inserted ToDo");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> TodoResult<Vec<ToDo>> {
        let mut conn = self.connector.acquire().await?;

        let rows: Vec<ToDoRow> = sqlx::query_as(
            "SELECT id, title, description, reminder FROM todo WHERE id = $1",
        )
        .bind(id)
        .fetch_all(conn.connection())
        .await
        .map_err(query_error("select"))?;

        Ok(rows.into_iter().map(ToDo::from).collect())
    }

    async fn update(&self, todo: ToDo) -> TodoResult<u64> {
        let mut conn = self.connector.acquire().await?;

        let result = sqlx::query(
            "UPDATE todo SET title = $1, description = $2, reminder = $3 WHERE id = $4",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.reminder)
        .bind(todo.id)
        .execute(conn.connection())
        .await
        .map_err(query_error("update"))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> TodoResult<u64> {
        let mut conn = self.connector.acquire().await?;

        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(conn.connection())
            .await
            .map_err(query_error("delete"))?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> TodoResult<Vec<ToDo>> {
        let mut conn = self.connector.acquire().await?;

        let rows: Vec<ToDoRow> =
            sqlx::query_as("SELECT id, title, description, reminder FROM todo")
                .fetch_all(conn.connection())
                .await
                .map_err(query_error("select"))?;

        Ok(rows.into_iter().map(ToDo::from).collect())
    }
}
