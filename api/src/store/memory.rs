use super::{PostStore, StoreError};
use crate::models::{NewPost, Post, PostChanges};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, mapref::entry::Entry};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Document {
    // Insertion sequence; gives the collection a stable natural order.
    seq: u64,
    post: Post,
}

/// In-process document collection.
///
/// `DashMap` shards its locks, so each single-document write is atomic
/// without a global mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: DashMap<Uuid, Document>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .docs
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        docs.sort_by_key(|doc| doc.seq);
        docs
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(slot) = self.docs.entry(id) {
                let post = Post {
                    id,
                    title: post.title,
                    content: post.content,
                    author: post.author,
                    created: Utc::now(),
                };
                slot.insert(Document {
                    seq,
                    post: post.clone(),
                });
                return Ok(post);
            }
        }
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, StoreError> {
        let mut inserted = Vec::with_capacity(posts.len());
        for post in posts {
            inserted.push(self.insert(post).await?);
        }
        Ok(inserted)
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.sorted().into_iter().map(|doc| doc.post).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.docs.get(&id).map(|doc| doc.post.clone()))
    }

    async fn find_one(&self) -> Result<Option<Post>, StoreError> {
        Ok(self
            .docs
            .iter()
            .min_by_key(|entry| entry.value().seq)
            .map(|entry| entry.value().post.clone()))
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, StoreError> {
        let mut doc = self.docs.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        changes.apply(&mut doc.post);
        Ok(doc.post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.docs
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.docs.len())
    }

    async fn drop_all(&self) -> Result<(), StoreError> {
        self.docs.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: format!("{title} content"),
            author: Author::new("Jane", "Doe"),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_created() {
        let store = MemoryStore::new();
        let before = Utc::now();

        let post = store.insert(new_post("first")).await.unwrap();

        assert!(post.created >= before);
        assert_eq!(store.find_by_id(post.id).await.unwrap(), Some(post));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryStore::new();
        let titles = ["a", "b", "c", "d"];
        store
            .insert_many(titles.iter().map(|t| new_post(t)).collect())
            .await
            .unwrap();

        let listed: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(listed, titles);
        assert_eq!(store.find_one().await.unwrap().unwrap().title, "a");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        let err = store.update(id, PostChanges::default()).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_is_terminal() {
        let store = MemoryStore::new();
        let post = store.insert(new_post("gone")).await.unwrap();

        store.delete(post.id).await.unwrap();

        assert_eq!(store.find_by_id(post.id).await.unwrap(), None);
        assert!(matches!(
            store.delete(post.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn drop_all_empties_the_collection() {
        let store = MemoryStore::new();
        store
            .insert_many(vec![new_post("x"), new_post("y")])
            .await
            .unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        store.drop_all().await.unwrap();

        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.find_one().await.unwrap(), None);
    }
}
