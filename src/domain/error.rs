use thiserror::Error;

/// Everything a repository can fail with: either the referenced id does not
/// exist, or the backing store misbehaved.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("todo not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
