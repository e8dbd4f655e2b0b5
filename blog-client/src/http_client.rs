use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{Comment, Post};

#[derive(Debug, Serialize)]
struct CreateCommentRequestDto<'a> {
    id: i64,
    post_id: i64,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    detail: Option<serde_json::Value>,
}

impl ErrorResponseDto {
    /// `detail` обычно строка, но сторонние прокси/валидаторы могут
    /// вернуть произвольный JSON: тогда отдаём его как есть.
    fn into_message(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(detail) => Some(detail),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageDto {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PostResponseDto {
    post: Post,
}

#[derive(Debug, Deserialize)]
struct ListPostsResponseDto {
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct ListCommentsResponseDto {
    comments: Vec<Comment>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API `blog-server`.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub(crate) fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        let message = response
            .json::<ErrorResponseDto>()
            .await
            .ok()
            .and_then(ErrorResponseDto::into_message);
        BlogClientError::from_http_status(status, message)
    }

    /// универсальный helper: отправляет запрос с опциональным json-payload
    async fn send<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: Option<&TReq>,
    ) -> BlogClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    async fn send_for_message(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> BlogClientResult<String> {
        let dto: MessageDto = self.send(method, path, body).await?;
        Ok(dto.message)
    }

    pub(crate) async fn create_post(&self, post: &Post) -> BlogClientResult<String> {
        self.send_for_message(Method::POST, "/posts/", Some(post))
            .await
    }

    pub(crate) async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        let dto: ListPostsResponseDto = self.send(Method::GET, "/posts/", None::<&()>).await?;
        Ok(dto.posts)
    }

    pub(crate) async fn get_post(&self, id: i64) -> BlogClientResult<Post> {
        let dto: PostResponseDto = self
            .send(Method::GET, &format!("/posts/{id}"), None::<&()>)
            .await?;
        Ok(dto.post)
    }

    pub(crate) async fn update_post(&self, id: i64, post: &Post) -> BlogClientResult<String> {
        self.send_for_message(Method::PUT, &format!("/posts/{id}"), Some(post))
            .await
    }

    pub(crate) async fn delete_post(&self, id: i64) -> BlogClientResult<String> {
        self.send_for_message(Method::DELETE, &format!("/posts/{id}"), None::<&()>)
            .await
    }

    pub(crate) async fn like_post(&self, id: i64) -> BlogClientResult<String> {
        self.send_for_message(Method::PUT, &format!("/posts/{id}/like/"), None::<&()>)
            .await
    }

    pub(crate) async fn dislike_post(&self, id: i64) -> BlogClientResult<String> {
        self.send_for_message(Method::PUT, &format!("/posts/{id}/dislike/"), None::<&()>)
            .await
    }

    pub(crate) async fn create_comment(
        &self,
        post_id: i64,
        id: i64,
        content: &str,
    ) -> BlogClientResult<String> {
        let payload = CreateCommentRequestDto {
            id,
            post_id,
            content,
        };
        self.send_for_message(
            Method::POST,
            &format!("/posts/{post_id}/comments/"),
            Some(&payload),
        )
        .await
    }

    pub(crate) async fn list_comments(&self, post_id: i64) -> BlogClientResult<Vec<Comment>> {
        let dto: ListCommentsResponseDto = self
            .send(
                Method::GET,
                &format!("/posts/{post_id}/comments/"),
                None::<&()>,
            )
            .await?;
        Ok(dto.comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must build");
        assert_eq!(client.endpoint("/posts/"), "http://localhost:8080/posts/");
        assert_eq!(
            client.endpoint("posts/7/like/"),
            "http://localhost:8080/posts/7/like/"
        );
    }

    #[test]
    fn post_response_fills_missing_counters() {
        let dto: PostResponseDto = serde_json::from_str(
            r#"{"post": {"id": 1, "title": "T", "content": "C"}}"#,
        )
        .expect("must deserialize");

        assert_eq!(dto.post, Post::new(1, "T", "C"));
    }

    #[test]
    fn error_detail_accepts_text_and_structured_values() {
        let text: ErrorResponseDto =
            serde_json::from_str(r#"{"detail": "Post not found with the specific post_id"}"#)
                .expect("must deserialize");
        assert_eq!(
            text.into_message().as_deref(),
            Some("Post not found with the specific post_id")
        );

        let structured: ErrorResponseDto =
            serde_json::from_str(r#"{"detail": [{"msg": "field required"}]}"#)
                .expect("must deserialize");
        let message = structured.into_message().expect("message must be present");
        assert!(message.contains("field required"));

        let empty: ErrorResponseDto = serde_json::from_str("{}").expect("must deserialize");
        assert!(empty.into_message().is_none());
    }

    #[test]
    fn comment_payload_carries_post_id() {
        let payload = CreateCommentRequestDto {
            id: 3,
            post_id: 9,
            content: "hi",
        };
        let value = serde_json::to_value(&payload).expect("must serialize");
        assert_eq!(value["post_id"], 9);
    }
}
