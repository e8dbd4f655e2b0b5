use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::map_mongo_error;
use crate::data::comment_repository::CommentRepository;
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct MongoCommentRepository {
    collection: Collection<CommentDocument>,
}

impl MongoCommentRepository {
    pub(crate) fn new(collection: Collection<CommentDocument>) -> Self {
        Self { collection }
    }

    pub(crate) async fn ensure_indexes(&self) -> Result<(), DomainError> {
        let index = IndexModel::builder().keys(doc! { "post_id": 1 }).build();

        self.collection
            .create_index(index)
            .await
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CommentDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    object_id: Option<ObjectId>,
    id: i64,
    post_id: i64,
    content: String,
}

impl From<Comment> for CommentDocument {
    fn from(comment: Comment) -> Self {
        Self {
            object_id: None,
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
        }
    }
}

#[async_trait]
impl CommentRepository for MongoCommentRepository {
    async fn create_comment(&self, comment: Comment) -> Result<(), DomainError> {
        self.collection
            .insert_one(CommentDocument::from(comment))
            .await
            .map_err(|err| map_mongo_error(err, "comment"))?;
        Ok(())
    }

    async fn list_comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let documents: Vec<CommentDocument> = self
            .collection
            .find(doc! { "post_id": post_id })
            .await
            .map_err(|err| map_mongo_error(err, "comment"))?
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(err, "comment"))?;

        Ok(documents.into_iter().map(Comment::from).collect())
    }
}

impl From<CommentDocument> for Comment {
    fn from(document: CommentDocument) -> Self {
        Comment::new(document.id, document.post_id, document.content)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc, oid::ObjectId};

    use super::CommentDocument;
    use crate::domain::comment::Comment;

    #[test]
    fn stored_document_maps_to_comment() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": 2_i64,
            "post_id": 9_i64,
            "content": "hello",
        };
        let document: CommentDocument = bson::from_document(stored).expect("must deserialize");

        assert_eq!(Comment::from(document), Comment::new(2, 9, "hello"));
    }

    #[test]
    fn stored_document_with_non_positive_id_is_read_back() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": 0_i64,
            "post_id": -4_i64,
            "content": "legacy",
        };
        let document: CommentDocument = bson::from_document(stored).expect("must deserialize");

        assert_eq!(Comment::from(document), Comment::new(0, -4, "legacy"));
    }
}
