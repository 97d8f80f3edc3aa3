use crate::models::Post;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Wire form of a post: exactly `id, title, content, author, created`, with
/// the author flattened to a display name.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            author: post.author.full_name(),
            id: post.id,
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}
