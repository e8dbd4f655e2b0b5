use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста, задаётся клиентом.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Количество лайков.
    #[serde(default)]
    pub likes: i64,
    /// Количество дизлайков.
    #[serde(default)]
    pub dislikes: i64,
}

impl Post {
    /// Создаёт пост с нулевыми счётчиками.
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            likes: 0,
            dislikes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель комментария.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: i64,
    /// Идентификатор поста, к которому относится комментарий.
    pub post_id: i64,
    /// Текст комментария.
    pub content: String,
}
