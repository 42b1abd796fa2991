use async_trait::async_trait;

use super::error::RepoError;
use super::todo::{CreateTodo, Todo, UpdateTodo};

/// Persistence contract, uniform across backends. Implementations own the
/// persisted state; callers never see a partially-applied write.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Assigns a fresh id and both timestamps, persists, returns the record.
    async fn create(&self, input: CreateTodo) -> Result<Todo, RepoError>;
    async fn get(&self, id: u64) -> Result<Todo, RepoError>;
    /// All records in unspecified order; empty vec on a fresh store.
    async fn list(&self) -> Result<Vec<Todo>, RepoError>;
    /// Replaces all mutable fields and refreshes `updated_at`.
    async fn update(&self, id: u64, input: UpdateTodo) -> Result<Todo, RepoError>;
    async fn delete(&self, id: u64) -> Result<(), RepoError>;
}
