use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Пост с указанным идентификатором не найден.
    #[error("not found: {0}")]
    NotFound(String),

    /// Пост с таким идентификатором уже существует.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Некорректный запрос или ошибка валидации на стороне сервера.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(message),
            reqwest::StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::InvalidRequest(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::BlogClientError;

    #[test]
    fn from_http_status_maps_known_statuses() {
        let not_found = BlogClientError::from_http_status(
            reqwest::StatusCode::NOT_FOUND,
            Some("Post not found with the specific post_id".to_string()),
        );
        assert!(matches!(
            not_found,
            BlogClientError::NotFound(ref msg) if msg == "Post not found with the specific post_id"
        ));

        let conflict = BlogClientError::from_http_status(reqwest::StatusCode::CONFLICT, None);
        assert!(matches!(conflict, BlogClientError::Conflict(_)));

        let invalid =
            BlogClientError::from_http_status(reqwest::StatusCode::UNPROCESSABLE_ENTITY, None);
        assert!(matches!(
            invalid,
            BlogClientError::InvalidRequest(ref msg) if msg.contains("422")
        ));
    }
}
