use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::error::RepoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, UpdateTodo};

/// Map-backed repository. The id counter lives under the same lock as the
/// map, so every operation is a single lock scope: shared for reads,
/// exclusive for writes. Ids restart at 1 per process.
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    items: HashMap<u64, Todo>,
    next_id: u64,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo, RepoError> {
        let mut store = self.inner.write().expect("todo store lock poisoned");
        store.next_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: store.next_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };
        store.items.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: u64) -> Result<Todo, RepoError> {
        let store = self.inner.read().expect("todo store lock poisoned");
        store.items.get(&id).cloned().ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Todo>, RepoError> {
        let store = self.inner.read().expect("todo store lock poisoned");
        Ok(store.items.values().cloned().collect())
    }

    async fn update(&self, id: u64, input: UpdateTodo) -> Result<Todo, RepoError> {
        let mut store = self.inner.write().expect("todo store lock poisoned");
        let todo = store.items.get_mut(&id).ok_or(RepoError::NotFound)?;
        todo.title = input.title;
        todo.description = input.description;
        todo.completed = input.completed;
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), RepoError> {
        let mut store = self.inner.write().expect("todo store lock poisoned");
        store.items.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(title: &str) -> CreateTodo {
        CreateTodo { title: title.into(), description: None, completed: false }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let repo = MemoryTodoRepository::new();
        let created = repo
            .create(CreateTodo {
                title: "buy milk".into(),
                description: Some("two liters".into()),
                completed: false,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(!created.completed);
        assert_eq!(created.created_at, created.updated_at);

        let got = repo.get(created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = MemoryTodoRepository::new();
        assert!(matches!(repo.get(42).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_advances_updated_at() {
        let repo = MemoryTodoRepository::new();
        let created = repo.create(new_todo("draft")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateTodo {
                    title: "final".into(),
                    description: Some("done deal".into()),
                    completed: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "final");
        assert_eq!(updated.description.as_deref(), Some("done deal"));
        assert!(updated.completed);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found_and_mutates_nothing() {
        let repo = MemoryTodoRepository::new();
        let created = repo.create(new_todo("keep me")).await.unwrap();

        let err = repo
            .update(999, UpdateTodo { title: "ghost".into(), description: None, completed: true })
            .await;
        assert!(matches!(err, Err(RepoError::NotFound)));

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = MemoryTodoRepository::new();
        let created = repo.create(new_todo("ephemeral")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(repo.get(created.id).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(created.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn list_is_empty_on_fresh_store() {
        let repo = MemoryTodoRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_list_delete_scenario() {
        let repo = MemoryTodoRepository::new();

        let milk = repo.create(new_todo("buy milk")).await.unwrap();
        assert_eq!(milk.id, 1);
        assert!(!milk.completed);

        let dog = repo.create(new_todo("walk dog")).await.unwrap();
        assert_eq!(dog.id, 2);

        assert_eq!(repo.list().await.unwrap().len(), 2);

        repo.delete(milk.id).await.unwrap();

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![dog]);
        assert!(matches!(repo.get(milk.id).await, Err(RepoError::NotFound)));
    }
}
