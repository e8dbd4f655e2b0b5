use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::data::repositories::mongo::comment_repository::MongoCommentRepository;
use crate::data::repositories::mongo::post_repository::MongoPostRepository;

pub(crate) const POSTS_COLLECTION: &str = "posts";
pub(crate) const COMMENTS_COLLECTION: &str = "comments";

#[derive(Debug, Clone)]
pub(crate) struct Store {
    client: Client,
    database: Database,
}

impl Store {
    pub(crate) async fn connect(url: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("failed to parse MongoDB connection string")?;
        let database = client.database(database_name);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB did not answer ping")?;
        info!(database = database_name, "connected to MongoDB");

        Ok(Self { client, database })
    }

    pub(crate) fn post_repository(&self) -> MongoPostRepository {
        MongoPostRepository::new(self.database.collection(POSTS_COLLECTION))
    }

    pub(crate) fn comment_repository(&self) -> MongoCommentRepository {
        MongoCommentRepository::new(self.database.collection(COMMENTS_COLLECTION))
    }

    pub(crate) async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client shut down");
    }
}

pub(crate) async fn ensure_indexes(
    posts: &MongoPostRepository,
    comments: &MongoCommentRepository,
) -> Result<()> {
    posts
        .ensure_indexes()
        .await
        .context("failed to create posts indexes")?;
    comments
        .ensure_indexes()
        .await
        .context("failed to create comments indexes")?;
    Ok(())
}
