use super::todo_service::{TodoService, TodoServiceImpl};
use crate::domain::error::RepoError;
use crate::domain::todo::{CreateTodo, UpdateTodo};
use crate::infrastructure::memory_repo::MemoryTodoRepository;

#[tokio::test]
async fn service_passes_through_create_and_get() {
    let service = TodoServiceImpl::new(MemoryTodoRepository::new());
    let created = service
        .create(CreateTodo { title: "X".into(), description: None, completed: false })
        .await
        .unwrap();
    assert_eq!(created.title, "X");
    let got = service.get(created.id).await.unwrap();
    assert_eq!(got, created);
}

#[tokio::test]
async fn service_passes_through_errors() {
    let service = TodoServiceImpl::new(MemoryTodoRepository::new());
    assert!(matches!(service.get(1).await, Err(RepoError::NotFound)));
    let input = UpdateTodo { title: "Y".into(), description: None, completed: true };
    assert!(matches!(service.update(1, input).await, Err(RepoError::NotFound)));
    assert!(matches!(service.delete(1).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn service_passes_through_update_and_delete() {
    let service = TodoServiceImpl::new(MemoryTodoRepository::new());
    let created = service
        .create(CreateTodo { title: "X".into(), description: None, completed: false })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateTodo { title: "Y".into(), description: Some("z".into()), completed: true },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Y");
    assert!(updated.completed);

    service.delete(created.id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());
}
