use std::net::SocketAddr;

use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::domain::repository::TodoRepository;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::memory_repo::MemoryTodoRepository;
use todo_api::infrastructure::sqlite_repo::SqliteTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let backend = std::env::var("TODO_BACKEND").unwrap_or_else(|_| "sqlite".to_string());
    let router = match backend.as_str() {
        "memory" => app_router(MemoryTodoRepository::new()),
        "sqlite" => {
            let database_url =
                std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db".to_string());
            // Ensure the SQLite file can be created/opened when file-backed
            prepare_sqlite_file(&database_url)?;
            let repo = SqliteTodoRepository::connect(&database_url).await?;
            repo.init().await?;
            app_router(repo)
        }
        other => anyhow::bail!("unknown TODO_BACKEND {other:?} (expected \"memory\" or \"sqlite\")"),
    };

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    tracing::info!(%addr, %backend, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn app_router<R: TodoRepository + Clone>(repo: R) -> axum::Router {
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}

/// Touch the database file for file-backed URLs so sqlx can open it.
/// `sqlite::memory:` has no `//` and falls through untouched.
fn prepare_sqlite_file(database_url: &str) -> anyhow::Result<()> {
    let Some(path) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}
