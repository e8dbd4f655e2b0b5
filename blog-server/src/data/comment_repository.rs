use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: Comment) -> Result<(), DomainError>;
    async fn list_comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
}
