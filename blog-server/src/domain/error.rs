use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("Post not found with the specific post_id")]
    PostNotFound(i64),

    #[error("resource already exists: {0}")]
    AlreadyExists(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
