use utoipa::OpenApi;

use crate::presentation::http::app_error::ErrorBody;
use crate::presentation::http::handlers::MessageDto;
use crate::presentation::http::handlers::comments::{
    CommentDto, CreateCommentDto, ListCommentsResponseDto,
};
use crate::presentation::http::handlers::posts::{
    CreatePostDto, ListPostsResponseDto, PostDto, PostResponseDto, UpdatePostDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::posts::like_post,
        crate::presentation::http::handlers::posts::dislike_post,
        crate::presentation::http::handlers::comments::create_comment,
        crate::presentation::http::handlers::comments::list_comments
    ),
    components(
        schemas(
            CreatePostDto,
            UpdatePostDto,
            PostDto,
            PostResponseDto,
            ListPostsResponseDto,
            CreateCommentDto,
            CommentDto,
            ListCommentsResponseDto,
            MessageDto,
            ErrorBody
        )
    ),
    tags(
        (name = "posts", description = "Post endpoints"),
        (name = "comments", description = "Comment endpoints")
    )
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/posts/",
            "/posts/{post_id}",
            "/posts/{post_id}/comments/",
            "/posts/{post_id}/like/",
            "/posts/{post_id}/dislike/",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }
}
