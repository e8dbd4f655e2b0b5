use std::process;

use anyhow::Result;
use blog_client::{BlogClient, BlogClientError, Comment, Post};
use clap::{Parser, Subcommand};

const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI клиент для blog-server")]
struct Cli {
    /// Адрес HTTP сервера.
    #[arg(long, global = true, env = "BLOG_SERVER")]
    server: Option<String>,

    /// Печатать ответы в формате JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Создание поста.
    Create {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value_t = 0)]
        likes: i64,
        #[arg(long, default_value_t = 0)]
        dislikes: i64,
    },
    /// Список всех постов.
    List,
    /// Получение поста по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Полная перезапись поста.
    ///
    /// Счётчики, не указанные явно, сбрасываются в 0.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value_t = 0)]
        likes: i64,
        #[arg(long, default_value_t = 0)]
        dislikes: i64,
    },
    /// Удаление поста.
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Лайк поста.
    Like {
        #[arg(long)]
        id: i64,
    },
    /// Дизлайк поста.
    Dislike {
        #[arg(long)]
        id: i64,
    },
    /// Добавление комментария к посту.
    Comment {
        #[arg(long)]
        post_id: i64,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        content: String,
    },
    /// Комментарии поста.
    Comments {
        #[arg(long)]
        post_id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let client = BlogClient::new(server).map_err(map_client_error)?;

    match cli.command {
        Command::Create {
            id,
            title,
            content,
            likes,
            dislikes,
        } => {
            let post = Post {
                id,
                title,
                content,
                likes,
                dislikes,
            };
            let message = client.create_post(&post).await.map_err(map_client_error)?;
            println!("{message}");
        }
        Command::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            if cli.json {
                print_json(&posts)?;
            } else {
                print_list(&posts);
            }
        }
        Command::Get { id } => {
            let post = client.get_post(id).await.map_err(map_client_error)?;
            if cli.json {
                print_json(&post)?;
            } else {
                print_post("Пост", &post);
            }
        }
        Command::Update {
            id,
            title,
            content,
            likes,
            dislikes,
        } => {
            let post = Post {
                id,
                title,
                content,
                likes,
                dislikes,
            };
            let message = client
                .update_post(id, &post)
                .await
                .map_err(map_client_error)?;
            println!("{message}");
        }
        Command::Delete { id } => {
            let message = client.delete_post(id).await.map_err(map_client_error)?;
            println!("{message}");
        }
        Command::Like { id } => {
            let message = client.like_post(id).await.map_err(map_client_error)?;
            println!("{message}");
        }
        Command::Dislike { id } => {
            let message = client.dislike_post(id).await.map_err(map_client_error)?;
            println!("{message}");
        }
        Command::Comment {
            post_id,
            id,
            content,
        } => {
            let message = client
                .create_comment(post_id, id, &content)
                .await
                .map_err(map_client_error)?;
            println!("{message}");
        }
        Command::Comments { post_id } => {
            let comments = client
                .list_comments(post_id)
                .await
                .map_err(map_client_error)?;
            if cli.json {
                print_json(&comments)?;
            } else {
                print_comments(post_id, &comments);
            }
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::NotFound(message) => format!("пост не найден: {message}"),
        BlogClientError::Conflict(message) => format!("пост уже существует: {message}"),
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("content: {}", post.content);
    println!("likes: {}", post.likes);
    println!("dislikes: {}", post.dislikes);
}

fn print_list(posts: &[Post]) {
    println!("Постов: {}", posts.len());

    for post in posts {
        println!(
            "- [{}] {} (+{} / -{})",
            post.id, post.title, post.likes, post.dislikes
        );
    }
}

fn print_comments(post_id: i64, comments: &[Comment]) {
    println!("Комментариев к посту {post_id}: {}", comments.len());

    for comment in comments {
        println!("- [{}] {}", comment.id, comment.content);
    }
}
