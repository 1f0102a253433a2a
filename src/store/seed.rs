//! Initial store contents: the built-in demo data and YAML fixtures.

use crate::error::{BlogError, Result};
use crate::model::{Comment, Post, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Fixtures {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixtures: Fixtures = serde_yaml::from_str(&content)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Rejects duplicate ids or emails and references to missing entities.
    pub fn validate(&self) -> Result<()> {
        let mut user_ids = HashSet::new();
        let mut emails = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id.as_str()) {
                return Err(invalid(format!("duplicate user id {}", user.id)));
            }
            if !emails.insert(user.email.as_str()) {
                return Err(invalid(format!(
                    "duplicate email {} (user {})",
                    user.email, user.id
                )));
            }
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.id.as_str()) {
                return Err(invalid(format!("duplicate post id {}", post.id)));
            }
            if !user_ids.contains(post.author.as_str()) {
                return Err(invalid(format!(
                    "post {} references unknown author {}",
                    post.id, post.author
                )));
            }
        }

        let mut comment_ids = HashSet::new();
        for comment in &self.comments {
            if !comment_ids.insert(comment.id.as_str()) {
                return Err(invalid(format!("duplicate comment id {}", comment.id)));
            }
            if !user_ids.contains(comment.author.as_str()) {
                return Err(invalid(format!(
                    "comment {} references unknown author {}",
                    comment.id, comment.author
                )));
            }
            if !post_ids.contains(comment.post.as_str()) {
                return Err(invalid(format!(
                    "comment {} references unknown post {}",
                    comment.id, comment.post
                )));
            }
        }
        Ok(())
    }

    /// Three users, three posts (only `11` published) and four comments.
    pub fn demo() -> Self {
        Self {
            users: vec![
                User::new("1", "Pietro", "pietro@balestra.dev").with_age(Some(28)),
                User::new("2", "Dafo", "didier@dafond.dev").with_age(Some(29)),
                User::new("3", "Mike", "mike@dafond.dev").with_age(Some(30)),
            ],
            posts: vec![
                Post::new("11", "Post 1", "1")
                    .with_body("lorem ipsum")
                    .with_published(true),
                Post::new("22", "Post 2", "1").with_body("lorem ipsum"),
                Post::new("33", "Post 3", "2").with_body("lorem ipsum"),
            ],
            comments: vec![
                Comment::new("111", "Comment 1", "1", "11"),
                Comment::new("222", "Comment 2", "1", "11"),
                Comment::new("333", "Comment 3", "2", "22"),
                Comment::new("444", "Comment 4", "3", "33"),
            ],
        }
    }
}

fn invalid(reason: String) -> BlogError {
    BlogError::Config(format!("Invalid fixtures: {}", reason))
}
