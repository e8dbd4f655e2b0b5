//! Клиентская библиотека для работы с blog-server по HTTP.
//!
//! Предоставляет `BlogClient` с одним методом на каждый маршрут сервиса:
//! посты, комментарии, лайки и дизлайки.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{Comment, Post};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент REST API блог-сервиса.
pub struct BlogClient {
    http_client: HttpClient,
}

impl BlogClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(base_url)?,
        })
    }

    /// Создаёт пост. Идентификатор задаётся клиентом и должен быть уникальным.
    ///
    /// Возвращает сообщение сервера.
    pub async fn create_post(&self, post: &Post) -> BlogClientResult<String> {
        self.http_client.create_post(post).await
    }

    /// Возвращает все посты. Порядок определяется хранилищем.
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.http_client.list_posts().await
    }

    /// Возвращает пост по идентификатору.
    pub async fn get_post(&self, id: i64) -> BlogClientResult<Post> {
        self.http_client.get_post(id).await
    }

    /// Полностью перезаписывает заголовок, содержимое и счётчики поста.
    ///
    /// `post.id` сервером игнорируется, используется `id`.
    pub async fn update_post(&self, id: i64, post: &Post) -> BlogClientResult<String> {
        self.http_client.update_post(id, post).await
    }

    /// Удаляет пост. Комментарии поста остаются в хранилище.
    pub async fn delete_post(&self, id: i64) -> BlogClientResult<String> {
        self.http_client.delete_post(id).await
    }

    /// Увеличивает счётчик лайков на 1.
    pub async fn like_post(&self, id: i64) -> BlogClientResult<String> {
        self.http_client.like_post(id).await
    }

    /// Увеличивает счётчик дизлайков на 1.
    pub async fn dislike_post(&self, id: i64) -> BlogClientResult<String> {
        self.http_client.dislike_post(id).await
    }

    /// Добавляет комментарий `id` к посту `post_id`.
    pub async fn create_comment(
        &self,
        post_id: i64,
        id: i64,
        content: &str,
    ) -> BlogClientResult<String> {
        self.http_client.create_comment(post_id, id, content).await
    }

    /// Возвращает комментарии поста.
    pub async fn list_comments(&self, post_id: i64) -> BlogClientResult<Vec<Comment>> {
        self.http_client.list_comments(post_id).await
    }
}
