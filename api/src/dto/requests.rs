use crate::models::{Author, NewPost, PostChanges};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
}

/// POST /posts body. `id` and `created` are not accepted from callers.
#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    #[validate(nested)]
    pub author: AuthorRequest,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            author: Author::new(req.author.first_name, req.author.last_name),
        }
    }
}

#[derive(Debug, Default, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatch {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: Option<String>,
}

/// PUT /posts/{id} body. Every field is optional; `id`, when present, has to
/// match the path.
#[derive(Debug, Default, Validate, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
    #[validate(nested)]
    pub author: Option<AuthorPatch>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        let author = req.author.unwrap_or_default();
        Self {
            title: req.title,
            content: req.content,
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}
