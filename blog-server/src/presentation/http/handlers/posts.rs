use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::MessageDto;
use crate::domain::post::{CreatePostRequest, Post, Reaction, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppResult, ErrorBody};
use crate::presentation::http::extractors::{JsonBody, PostIdPath};

pub(crate) const POST_CREATED: &str = "Post created successfully";
pub(crate) const POST_UPDATED: &str = "Post updated successfully";
pub(crate) const POST_DELETED: &str = "Post deleted successfully";
pub(crate) const POST_LIKED: &str = "Post liked successfully";
pub(crate) const POST_DISLIKED: &str = "Post disliked successfully";

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreatePostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    #[serde(default)]
    pub(crate) likes: i64,
    #[serde(default)]
    pub(crate) dislikes: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdatePostDto {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
    pub(crate) content: String,
    #[serde(default)]
    pub(crate) likes: i64,
    #[serde(default)]
    pub(crate) dislikes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) likes: i64,
    pub(crate) dislikes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostResponseDto {
    pub(crate) post: PostDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ListPostsResponseDto {
    pub(crate) posts: Vec<PostDto>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            likes: post.likes,
            dislikes: post.dislikes,
        }
    }
}

#[utoipa::path(
    post,
    path = "/posts/",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = MessageDto),
        (status = 409, description = "Post id already taken", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreatePostDto>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    let req = CreatePostRequest {
        id: dto.id,
        title: dto.title,
        content: dto.content,
        likes: dto.likes,
        dislikes: dto.dislikes,
    };

    state.blog_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(MessageDto::new(POST_CREATED))))
}

#[utoipa::path(
    get,
    path = "/posts/",
    tag = "posts",
    responses(
        (status = 200, description = "Posts listed", body = ListPostsResponseDto),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ListPostsResponseDto>)> {
    let posts = state.blog_service.list_posts().await?;

    Ok((
        StatusCode::OK,
        Json(ListPostsResponseDto {
            posts: posts.into_iter().map(PostDto::from).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{post_id}",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostResponseDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> AppResult<(StatusCode, Json<PostResponseDto>)> {
    let post = state.blog_service.get_post(post_id).await?;

    Ok((
        StatusCode::OK,
        Json(PostResponseDto {
            post: PostDto::from(post),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/posts/{post_id}",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
    JsonBody(dto): JsonBody<UpdatePostDto>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    if let Some(body_id) = dto.id
        && body_id != post_id
    {
        debug!(post_id, body_id, "ignoring id from update body");
    }
    let req = UpdatePostRequest {
        title: dto.title,
        content: dto.content,
        likes: dto.likes,
        dislikes: dto.dislikes,
    };

    state.blog_service.update_post(post_id, req).await?;
    Ok((StatusCode::OK, Json(MessageDto::new(POST_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/posts/{post_id}",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.blog_service.delete_post(post_id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new(POST_DELETED))))
}

#[utoipa::path(
    put,
    path = "/posts/{post_id}/like/",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post liked", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn like_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.blog_service.react(post_id, Reaction::Like).await?;
    Ok((StatusCode::OK, Json(MessageDto::new(POST_LIKED))))
}

#[utoipa::path(
    put,
    path = "/posts/{post_id}/dislike/",
    tag = "posts",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post disliked", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub(crate) async fn dislike_post(
    State(state): State<AppState>,
    PostIdPath(post_id): PostIdPath,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.blog_service.react(post_id, Reaction::Dislike).await?;
    Ok((StatusCode::OK, Json(MessageDto::new(POST_DISLIKED))))
}
