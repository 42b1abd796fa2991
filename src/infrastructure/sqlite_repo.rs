use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use crate::domain::error::RepoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};

/// SQLite-backed repository. Ids come from the rowid autoincrement;
/// concurrency is left to the pool and the database itself.
#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self, RepoError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub async fn init(&self) -> Result<(), RepoError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            other => RepoError::Storage(other.into()),
        }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo, RepoError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO todos (title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(now)
        .fetch_one(&*self.pool)
        .await?;
        Ok(Todo {
            id: id as u64,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: u64) -> Result<Todo, RepoError> {
        let row = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos WHERE id = ?1",
        )
        .bind(id as i64)
        .fetch_optional(&*self.pool)
        .await?;
        match row {
            Some(row) => Ok(row_to_todo(row)?),
            None => Err(RepoError::NotFound),
        }
    }

    async fn list(&self) -> Result<Vec<Todo>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, title, description, completed, created_at, updated_at FROM todos",
        )
        .fetch_all(&*self.pool)
        .await?;
        rows.into_iter()
            .map(|row| row_to_todo(row).map_err(RepoError::from))
            .collect()
    }

    async fn update(&self, id: u64, input: UpdateTodo) -> Result<Todo, RepoError> {
        let row = sqlx::query(
            "UPDATE todos SET title = ?2, description = ?3, completed = ?4, updated_at = ?5
             WHERE id = ?1
             RETURNING id, title, description, completed, created_at, updated_at",
        )
        .bind(id as i64)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(Utc::now())
        .fetch_optional(&*self.pool)
        .await?;
        match row {
            Some(row) => Ok(row_to_todo(row)?),
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: u64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id as i64)
            .execute(&*self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

fn row_to_todo(row: SqliteRow) -> Result<Todo, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    Ok(Todo {
        id: id as u64,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
