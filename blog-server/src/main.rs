use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blog_service::BlogService;
use infrastructure::database::{Store, ensure_indexes};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let store = Store::connect(&settings.mongo_url, &settings.mongo_database).await?;
    let posts = store.post_repository();
    let comments = store.comment_repository();
    ensure_indexes(&posts, &comments).await?;

    let blog_service = Arc::new(BlogService::new(Arc::new(posts), Arc::new(comments)));
    let state = AppState::new(blog_service);

    let result = server::run_http(&settings, state).await;
    store.shutdown().await;
    result
}
