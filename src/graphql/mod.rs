//! GraphQL schema and resolvers for the blog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL on http://localhost:4000)
//! graphql-basics serve --port 4000
//!
//! # Execute a query from CLI
//! graphql-basics query '{ users(query: "da") { name posts { title } } }'
//!
//! # Execute a mutation from CLI
//! graphql-basics mutate 'createUser(name: "Ann", email: "ann@x.com") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `comments`, `users`, `posts`, `me`, `post`
//! - **Mutations**: `createUser`, `createPost`, `createComment`
//! - **Relations**: `User.posts`, `User.comments`, `Post.author`,
//!   `Post.comments`, `Comment.author`, `Comment.post`
//!
//! Rejected mutations report an error with an extension `code` of
//! `CONFLICT` or `NOT_FOUND` and leave the store unchanged.

mod schema;
mod server;
mod types;

pub use schema::{BlogSchema, MutationRoot, QueryRoot, SENTINEL_ID, build_schema, schema_sdl};
pub use server::{router, run_server};
pub use types::{Comment, Post, User};
