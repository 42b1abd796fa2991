use async_trait::async_trait;

use crate::domain::error::RepoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, RepoError>;
    async fn get(&self, id: u64) -> Result<Todo, RepoError>;
    async fn list(&self) -> Result<Vec<Todo>, RepoError>;
    async fn update(&self, id: u64, input: UpdateTodo) -> Result<Todo, RepoError>;
    async fn delete(&self, id: u64) -> Result<(), RepoError>;
}

/// Pass-through today; the seam where business rules would land.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo, RepoError> {
        self.repo.create(input).await
    }
    async fn get(&self, id: u64) -> Result<Todo, RepoError> {
        self.repo.get(id).await
    }
    async fn list(&self) -> Result<Vec<Todo>, RepoError> {
        self.repo.list().await
    }
    async fn update(&self, id: u64, input: UpdateTodo) -> Result<Todo, RepoError> {
        self.repo.update(id, input).await
    }
    async fn delete(&self, id: u64) -> Result<(), RepoError> {
        self.repo.delete(id).await
    }
}
