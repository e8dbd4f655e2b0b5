use std::time::{SystemTime, UNIX_EPOCH};

use blog_client::{BlogClient, BlogClientError, Post};

fn unique_id() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    (nanos % 1_000_000_000_000) as i64 + 1
}

fn client() -> BlogClient {
    let base_url =
        std::env::var("BLOG_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    BlogClient::new(base_url).expect("client must build")
}

#[tokio::test]
#[ignore = "requires running HTTP server and MongoDB"]
async fn http_smoke_flow() {
    let client = client();
    let id = unique_id();

    let message = client
        .create_post(&Post::new(id, "smoke title", "smoke content"))
        .await
        .expect("create_post must succeed");
    assert_eq!(message, "Post created successfully");

    let fetched = client.get_post(id).await.expect("get_post must succeed");
    assert_eq!(fetched, Post::new(id, "smoke title", "smoke content"));

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == id));

    let duplicate = client
        .create_post(&Post::new(id, "again", "again"))
        .await;
    assert!(matches!(duplicate, Err(BlogClientError::Conflict(_))));

    client.like_post(id).await.expect("like_post must succeed");
    client.like_post(id).await.expect("like_post must succeed");
    client
        .dislike_post(id)
        .await
        .expect("dislike_post must succeed");
    let reacted = client.get_post(id).await.expect("get_post must succeed");
    assert_eq!(reacted.likes, 2);
    assert_eq!(reacted.dislikes, 1);

    let replacement = Post {
        id,
        title: "smoke title updated".to_string(),
        content: "smoke content updated".to_string(),
        likes: 0,
        dislikes: 0,
    };
    client
        .update_post(id, &replacement)
        .await
        .expect("update_post must succeed");
    let updated = client.get_post(id).await.expect("get_post must succeed");
    assert_eq!(updated, replacement);

    client
        .create_comment(id, 1, "first comment")
        .await
        .expect("create_comment must succeed");
    let comments = client
        .list_comments(id)
        .await
        .expect("list_comments must succeed");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, id);

    client.delete_post(id).await.expect("delete_post must succeed");

    let after_delete = client.get_post(id).await;
    assert!(matches!(after_delete, Err(BlogClientError::NotFound(_))));
    let second_delete = client.delete_post(id).await;
    assert!(matches!(second_delete, Err(BlogClientError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires running HTTP server and MongoDB"]
async fn missing_post_is_not_found_everywhere() {
    let client = client();
    let id = unique_id();

    assert!(matches!(
        client.get_post(id).await,
        Err(BlogClientError::NotFound(_))
    ));
    assert!(matches!(
        client.like_post(id).await,
        Err(BlogClientError::NotFound(_))
    ));
    assert!(matches!(
        client.create_comment(id, 1, "orphan").await,
        Err(BlogClientError::NotFound(_))
    ));
    assert!(matches!(
        client.list_comments(id).await,
        Err(BlogClientError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires running HTTP server and MongoDB"]
async fn concurrent_likes_are_all_counted() {
    const LIKES: i64 = 50;

    let client = client();
    let id = unique_id();
    client
        .create_post(&Post::new(id, "burst", "burst"))
        .await
        .expect("create_post must succeed");

    let tasks: Vec<_> = (0..LIKES)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.like_post(id).await })
        })
        .collect();
    for task in tasks {
        task.await
            .expect("task must not panic")
            .expect("like_post must succeed");
    }

    let post = client.get_post(id).await.expect("get_post must succeed");
    assert_eq!(post.likes, LIKES);
    assert_eq!(post.dislikes, 0);

    client.delete_post(id).await.expect("delete_post must succeed");
}
