//! Data models for the blog.
//!
//! - [`User`]: an author, unique by email
//! - [`Post`]: an article written by a user
//! - [`Comment`]: a note left by a user on a post
//!
//! Relationships are stored as id references only (`Post::author`,
//! `Comment::author`, `Comment::post`); the inverse sides are derived by the store.

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use user::User;
