use axum::Router;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::http::handlers::comments::{create_comment, list_comments};
use crate::presentation::http::handlers::posts::{
    create_post, delete_post, dislike_post, get_post, like_post, list_posts, update_post,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts/", get(list_posts).post(create_post))
        .route(
            "/posts/{post_id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route(
            "/posts/{post_id}/comments/",
            get(list_comments).post(create_comment),
        )
        .route("/posts/{post_id}/like/", put(like_post))
        .route("/posts/{post_id}/dislike/", put(dislike_post))
}
