//! Document store holding posts.
//!
//! Handlers and the test harness only talk to [`PostStore`]; the concrete
//! collection behind it is chosen at startup.

mod memory;

pub use memory::MemoryStore;

use crate::models::{NewPost, Post, PostChanges};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post {0} not found")]
    NotFound(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Operations the service and its tests need from a document collection.
///
/// Every method touches at most one document except the bulk helpers
/// (`insert_many`, `drop_all`), which are there for seeding and teardown.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a document, assigning its `id` and `created` timestamp.
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, StoreError>;

    /// All documents in insertion order.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// The first document in insertion order, if any.
    async fn find_one(&self) -> Result<Option<Post>, StoreError>;

    /// Apply `changes` in place and return the updated document.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError>;

    /// Hard delete. Fails with [`StoreError::NotFound`] for unknown ids.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;

    async fn drop_all(&self) -> Result<(), StoreError>;
}
