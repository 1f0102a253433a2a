//! # graphql-basics - a small GraphQL API over in-memory data
//!
//! Three related collections (users, posts and comments) live in process
//! memory and are exposed through GraphQL queries and mutations, with
//! relationship resolution between them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve GraphQL (and GraphiQL) on http://127.0.0.1:4000
//! graphql-basics serve
//!
//! # One-off query against the demo data
//! graphql-basics query '{ posts(query: "lorem") { title author { name } } }'
//!
//! # Print the schema
//! graphql-basics schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (User, Post, Comment)
//! - [`store`]: In-memory collections and id generation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `graphql-basics.yml` files and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server exposing it.
pub mod graphql;

/// Logging setup.
///
/// Configures tracing output to stderr and an optional rolling JSON file.
pub mod logging;

/// Data models for users, posts and comments.
pub mod model;

/// In-memory storage.
pub mod store;
