use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::error::{BlogError, Result};
use crate::model;
use crate::store::{SharedStore, Store};

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// SDL of the schema; independent of any store contents.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Id shared by the `me` and `post` sentinels.
pub const SENTINEL_ID: &str = "123";

/// Fixed viewer returned by `me`. Not backed by the store.
fn sentinel_user() -> model::User {
    model::User::new(SENTINEL_ID, "Mike", "mike@mike.com").with_age(Some(29))
}

/// Fixed post returned by `post`. Its author key names the `me` sentinel,
/// which is not in the store, so `author` resolves to a NOT_FOUND error.
fn sentinel_post() -> model::Post {
    model::Post::new(SENTINEL_ID, "Post title", SENTINEL_ID)
        .with_body("Post content")
        .with_published(true)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All comments
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = shared_store(ctx)?.lock().await;
        tracing::debug!("Listing comments");
        Ok(store.list_comments().into_iter().map(Comment::from).collect())
    }

    /// Users, optionally filtered by a case-insensitive substring of the name
    async fn users(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<User>> {
        let store = shared_store(ctx)?.lock().await;
        tracing::debug!(query = ?query, "Listing users");
        Ok(store
            .list_users(query.as_deref())
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Posts, optionally filtered by a case-insensitive substring of the title or body
    async fn posts(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Post>> {
        let store = shared_store(ctx)?.lock().await;
        tracing::debug!(query = ?query, "Listing posts");
        Ok(store
            .list_posts(query.as_deref())
            .into_iter()
            .map(Post::from)
            .collect())
    }

    /// The current viewer (fixed demo value)
    async fn me(&self) -> User {
        sentinel_user().into()
    }

    /// A sample post (fixed demo value)
    async fn post(&self) -> Post {
        sentinel_post().into()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; the email must not be taken
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> async_graphql::Result<User> {
        let mut store = shared_store(ctx)?.lock().await;
        create_user(&mut store, name, email, age)
            .map(User::from)
            .map_err(|e| e.extend())
    }

    /// Create a post for an existing author
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        published: bool,
        author: ID,
    ) -> async_graphql::Result<Post> {
        let mut store = shared_store(ctx)?.lock().await;
        create_post(&mut store, title, body, published, author.as_str())
            .map(Post::from)
            .map_err(|e| e.extend())
    }

    /// Comment on a published post as an existing user
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        author: ID,
        post: ID,
    ) -> async_graphql::Result<Comment> {
        let mut store = shared_store(ctx)?.lock().await;
        create_comment(&mut store, text, author.as_str(), post.as_str())
            .map(Comment::from)
            .map_err(|e| e.extend())
    }
}

fn create_user(
    store: &mut Store,
    name: String,
    email: String,
    age: Option<i32>,
) -> Result<model::User> {
    if store.email_taken(&email) {
        tracing::warn!(email = %email, "Rejected user: email taken");
        return Err(BlogError::Conflict(format!("Email {} is already taken", email)));
    }

    let user = model::User::new(store.next_id()?, name, email).with_age(age);
    tracing::info!(id = %user.id, email = %user.email, "Creating user");
    store.append_user(user.clone());
    Ok(user)
}

fn create_post(
    store: &mut Store,
    title: String,
    body: String,
    published: bool,
    author: &str,
) -> Result<model::Post> {
    if store.find_user_by_id(author).is_none() {
        tracing::warn!(author = %author, "Rejected post: unknown author");
        return Err(BlogError::NotFound(format!("User {}", author)));
    }

    let post = model::Post::new(store.next_id()?, title, author)
        .with_body(body)
        .with_published(published);
    tracing::info!(id = %post.id, title = %post.title, "Creating post");
    store.append_post(post.clone());
    Ok(post)
}

fn create_comment(
    store: &mut Store,
    text: String,
    author: &str,
    post: &str,
) -> Result<model::Comment> {
    if store.find_user_by_id(author).is_none() {
        tracing::warn!(author = %author, "Rejected comment: unknown author");
        return Err(BlogError::NotFound(format!("User {}", author)));
    }
    match store.find_post_by_id(post) {
        Some(p) if p.published => {}
        Some(_) => {
            tracing::warn!(post = %post, "Rejected comment: post not published");
            return Err(BlogError::NotFound(format!("Published post {}", post)));
        }
        None => {
            tracing::warn!(post = %post, "Rejected comment: unknown post");
            return Err(BlogError::NotFound(format!("Post {}", post)));
        }
    }

    let comment = model::Comment::new(store.next_id()?, text, author, post);
    tracing::info!(id = %comment.id, post = %comment.post, "Creating comment");
    store.append_comment(comment.clone());
    Ok(comment)
}
