use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    pub post: String,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
        post: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            post: post.into(),
        }
    }
}
