use std::sync::Arc;

use tracing::info;

use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::{PostPatch, PostRepository};
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, Reaction, UpdatePostRequest};

pub(crate) struct BlogService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub(crate) fn new(posts: Arc<dyn PostRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { posts, comments }
    }

    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let post = Post::from(req);
        self.posts.create_post(post.clone()).await?;
        info!(post_id = post.id, "post created");
        Ok(post)
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.list_posts().await
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .get_post(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    pub(crate) async fn update_post(
        &self,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<(), DomainError> {
        self.get_post(post_id).await?;

        let patch = PostPatch {
            title: req.title,
            content: req.content,
            likes: req.likes,
            dislikes: req.dislikes,
        };
        let matched = self.posts.replace_post(post_id, patch).await?;
        if !matched {
            return Err(DomainError::PostNotFound(post_id));
        }
        Ok(())
    }

    // комментарии поста не удаляются
    pub(crate) async fn delete_post(&self, post_id: i64) -> Result<(), DomainError> {
        self.get_post(post_id).await?;

        let deleted = self.posts.delete_post(post_id).await?;
        if !deleted {
            return Err(DomainError::PostNotFound(post_id));
        }
        info!(post_id, "post deleted");
        Ok(())
    }

    pub(crate) async fn react(&self, post_id: i64, reaction: Reaction) -> Result<(), DomainError> {
        self.get_post(post_id).await?;

        let matched = self.posts.increment_reaction(post_id, reaction).await?;
        if !matched {
            return Err(DomainError::PostNotFound(post_id));
        }
        Ok(())
    }

    pub(crate) async fn create_comment(
        &self,
        post_id: i64,
        req: CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        self.get_post(post_id).await?;

        let comment = req.bind_to(post_id);
        self.comments.create_comment(comment.clone()).await?;
        Ok(comment)
    }

    pub(crate) async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        self.get_post(post_id).await?;
        self.comments.list_comments_by_post(post_id).await
    }
}
