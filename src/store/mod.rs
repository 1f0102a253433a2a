//! In-memory storage for users, posts and comments.
//!
//! ## Components
//!
//! - [`Store`]: the three collections with filtered and keyed lookup
//! - [`IdGenerator`]: source of fresh entity ids ([`RandomIds`], [`SequentialIds`])
//! - [`Fixtures`]: initial contents, built-in demo data or a YAML file
//!
//! The GraphQL layer shares one store as a [`SharedStore`]; every read and
//! append goes through its single lock.

mod ids;
mod memory;
mod seed;

use std::sync::Arc;
use tokio::sync::Mutex;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use memory::Store;
pub use seed::Fixtures;

pub type SharedStore = Arc<Mutex<Store>>;

pub fn shared(store: Store) -> SharedStore {
    Arc::new(Mutex::new(store))
}
