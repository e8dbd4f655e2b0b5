use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::{Collection, IndexModel, options::IndexOptions};
use serde::{Deserialize, Serialize};

use super::map_mongo_error;
use crate::data::post_repository::{PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, Reaction};

#[derive(Debug, Clone)]
pub(crate) struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub(crate) fn new(collection: Collection<PostDocument>) -> Self {
        Self { collection }
    }

    pub(crate) async fn ensure_indexes(&self) -> Result<(), DomainError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    object_id: Option<ObjectId>,
    id: i64,
    title: String,
    content: String,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    dislikes: i64,
}

impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            object_id: None,
            id: post.id,
            title: post.title,
            content: post.content,
            likes: post.likes,
            dislikes: post.dislikes,
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn create_post(&self, post: Post) -> Result<(), DomainError> {
        let post_id = post.id;
        self.collection
            .insert_one(PostDocument::from(post))
            .await
            .map_err(|err| map_mongo_error(err, &format!("post id: {post_id}")))?;
        Ok(())
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "id": id })
            .await
            .map_err(|err| map_mongo_error(err, "post"))?;

        Ok(document.map(Post::from))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let documents: Vec<PostDocument> = self
            .collection
            .find(doc! {})
            .await
            .map_err(|err| map_mongo_error(err, "post"))?
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(err, "post"))?;

        Ok(documents.into_iter().map(Post::from).collect())
    }

    async fn replace_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! {
                    "$set": {
                        "title": patch.title,
                        "content": patch.content,
                        "likes": patch.likes,
                        "dislikes": patch.dislikes,
                    }
                },
            )
            .await
            .map_err(|err| map_mongo_error(err, "post"))?;

        Ok(result.matched_count > 0)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let result = self
            .collection
            .delete_one(doc! { "id": id })
            .await
            .map_err(|err| map_mongo_error(err, "post"))?;

        Ok(result.deleted_count > 0)
    }

    async fn increment_reaction(&self, id: i64, reaction: Reaction) -> Result<bool, DomainError> {
        let mut increment = Document::new();
        increment.insert(reaction.counter_field(), 1_i64);

        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$inc": increment })
            .await
            .map_err(|err| map_mongo_error(err, "post"))?;

        Ok(result.matched_count > 0)
    }
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Post::new(
            document.id,
            document.title,
            document.content,
            document.likes,
            document.dislikes,
        )
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc, oid::ObjectId};

    use super::PostDocument;
    use crate::domain::post::Post;

    #[test]
    fn new_document_has_no_object_id_field() {
        let post = Post::new(1, "T", "C", 0, 0);
        let raw = bson::to_document(&PostDocument::from(post)).expect("must serialize");

        assert!(!raw.contains_key("_id"));
        assert_eq!(raw.get_i64("id").expect("id must be i64"), 1);
    }

    #[test]
    fn stored_document_maps_to_post_without_object_id() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": 5_i32,
            "title": "T",
            "content": "C",
        };
        let document: PostDocument = bson::from_document(stored).expect("must deserialize");

        assert_eq!(Post::from(document), Post::new(5, "T", "C", 0, 0));
    }

    #[test]
    fn stored_document_with_zero_id_and_negative_counter_is_read_back() {
        for (id, likes) in [(0_i64, 0_i64), (4, -2), (-7, 1)] {
            let stored = doc! {
                "_id": ObjectId::new(),
                "id": id,
                "title": "legacy",
                "content": "C",
                "likes": likes,
                "dislikes": 0_i64,
            };
            let document: PostDocument = bson::from_document(stored).expect("must deserialize");

            assert_eq!(Post::from(document), Post::new(id, "legacy", "C", likes, 0));
        }
    }
}
