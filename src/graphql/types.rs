use crate::error::BlogError;
use crate::model;
use crate::store::SharedStore;
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, SimpleObject};

pub(super) fn shared_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: u.id.into(),
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = shared_store(ctx)?.lock().await;
        Ok(store
            .posts_by_author(self.id.as_str())
            .into_iter()
            .map(Post::from)
            .collect())
    }

    /// Comments written by this user
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = shared_store(ctx)?.lock().await;
        Ok(store
            .comments_by_author(self.id.as_str())
            .into_iter()
            .map(Comment::from)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,
    #[graphql(skip)]
    pub author_id: String,
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: p.id.into(),
            title: p.title,
            body: p.body,
            published: p.published,
            author_id: p.author,
        }
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = shared_store(ctx)?.lock().await;
        resolve_user(store.find_user_by_id(&self.author_id), &self.author_id)
    }

    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = shared_store(ctx)?.lock().await;
        Ok(store
            .comments_for_post(self.id.as_str())
            .into_iter()
            .map(Comment::from)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub text: String,
    #[graphql(skip)]
    pub author_id: String,
    #[graphql(skip)]
    pub post_id: String,
}

impl From<model::Comment> for Comment {
    fn from(c: model::Comment) -> Self {
        Self {
            id: c.id.into(),
            text: c.text,
            author_id: c.author,
            post_id: c.post,
        }
    }
}

#[ComplexObject]
impl Comment {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = shared_store(ctx)?.lock().await;
        resolve_user(store.find_user_by_id(&self.author_id), &self.author_id)
    }

    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Post> {
        let store = shared_store(ctx)?.lock().await;
        store
            .find_post_by_id(&self.post_id)
            .map(Post::from)
            .ok_or_else(|| BlogError::NotFound(format!("Post {}", self.post_id)).extend())
    }
}

// Non-null to-one relations: a dangling key is a field error.
fn resolve_user(user: Option<model::User>, id: &str) -> async_graphql::Result<User> {
    user.map(User::from)
        .ok_or_else(|| BlogError::NotFound(format!("User {}", id)).extend())
}
