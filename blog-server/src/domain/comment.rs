use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) id: i64,
    pub(crate) content: String,
}

impl CreateCommentRequest {
    pub(crate) fn bind_to(self, post_id: i64) -> Comment {
        Comment::new(self.id, post_id, self.content)
    }
}

impl Comment {
    pub(crate) fn new(id: i64, post_id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            post_id,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Comment, CreateCommentRequest};

    #[test]
    fn bind_to_overrides_post_id() {
        let req = CreateCommentRequest {
            id: 3,
            content: "nice".to_string(),
        };

        let comment = req.bind_to(42);
        assert_eq!(comment.post_id, 42);
        assert_eq!(comment.id, 3);
        assert_eq!(comment.content, "nice");
    }

    #[test]
    fn bind_to_keeps_non_positive_id() {
        let req = CreateCommentRequest {
            id: -1,
            content: "nice".to_string(),
        };

        assert_eq!(req.bind_to(2), Comment::new(-1, 2, "nice"));
    }
}
