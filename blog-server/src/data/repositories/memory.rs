use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::{PostPatch, PostRepository};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, Reaction};

#[derive(Default)]
struct MemoryState {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    mutation_calls: usize,
}

#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // считается каждый вызов, даже если запись не найдена
    pub(crate) fn mutation_calls(&self) -> usize {
        self.state
            .lock()
            .expect("memory store mutex poisoned")
            .mutation_calls
    }

    pub(crate) fn comments(&self) -> Vec<Comment> {
        self.state
            .lock()
            .expect("memory store mutex poisoned")
            .comments
            .clone()
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create_post(&self, post: Post) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("memory store mutex poisoned");
        state.mutation_calls += 1;
        if state.posts.iter().any(|existing| existing.id == post.id) {
            return Err(DomainError::AlreadyExists(format!("post id: {}", post.id)));
        }
        state.posts.push(post);
        Ok(())
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let state = self.state.lock().expect("memory store mutex poisoned");
        Ok(state.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let state = self.state.lock().expect("memory store mutex poisoned");
        Ok(state.posts.clone())
    }

    async fn replace_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
        let mut state = self.state.lock().expect("memory store mutex poisoned");
        state.mutation_calls += 1;
        let Some(post) = state.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(false);
        };
        post.title = patch.title;
        post.content = patch.content;
        post.likes = patch.likes;
        post.dislikes = patch.dislikes;
        Ok(true)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.lock().expect("memory store mutex poisoned");
        state.mutation_calls += 1;
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);
        Ok(state.posts.len() < before)
    }

    async fn increment_reaction(&self, id: i64, reaction: Reaction) -> Result<bool, DomainError> {
        let mut state = self.state.lock().expect("memory store mutex poisoned");
        state.mutation_calls += 1;
        let Some(post) = state.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(false);
        };
        match reaction {
            Reaction::Like => post.likes += 1,
            Reaction::Dislike => post.dislikes += 1,
        }
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create_comment(&self, comment: Comment) -> Result<(), DomainError> {
        let mut state = self.state.lock().expect("memory store mutex poisoned");
        state.mutation_calls += 1;
        state.comments.push(comment);
        Ok(())
    }

    async fn list_comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let state = self.state.lock().expect("memory store mutex poisoned");
        Ok(state
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }
}
