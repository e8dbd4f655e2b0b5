use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, Reaction};

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) likes: i64,
    pub(crate) dislikes: i64,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, post: Post) -> Result<(), DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn replace_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
    // $inc на стороне хранилища, конкурентные вызовы не теряются
    async fn increment_reaction(&self, id: i64, reaction: Reaction) -> Result<bool, DomainError>;
}
