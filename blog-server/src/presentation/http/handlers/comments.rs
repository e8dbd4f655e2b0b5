use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::MessageDto;
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppResult, ErrorBody};
use crate::presentation::http::extractors::{JsonBody, PostIdPath};

pub(crate) const COMMENT_CREATED: &str = "Comment created successfully";

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateCommentDto {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) post_id: Option<i64>,
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ListCommentsResponseDto {
    pub(crate) comments: Vec<CommentDto>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
        }
    }
}

#[utoipa::path(
    post,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn create_comment(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
    JsonBody(dto): JsonBody<CreateCommentDto>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    if let Some(body_post_id) = dto.post_id
        && body_post_id != post_id
    {
        debug!(post_id, body_post_id, "overriding post_id from comment body");
    }
    let req = CreateCommentRequest {
        id: dto.id,
        content: dto.content,
    };

    state.blog_service.create_comment(post_id, req).await?;
    Ok((StatusCode::CREATED, Json(MessageDto::new(COMMENT_CREATED))))
}

#[utoipa::path(
    get,
    path = "/posts/{post_id}/comments/",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Comments listed", body = ListCommentsResponseDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn list_comments(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> AppResult<(StatusCode, Json<ListCommentsResponseDto>)> {
    let comments = state.blog_service.list_comments(post_id).await?;

    Ok((
        StatusCode::OK,
        Json(ListCommentsResponseDto {
            comments: comments.into_iter().map(CommentDto::from).collect(),
        }),
    ))
}
