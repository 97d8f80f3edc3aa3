use crate::{
    AppState,
    dto::{CreatePostRequest, PostResponse, UpdatePostRequest},
    errors::ApiError,
    extract::{PostId, ValidatedJson},
    models::{NewPost, PostChanges},
};
use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state.store.find_all().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(post.into()))
}

/// POST /posts
/// Body: { "title": "...", "content": "...", "author": { "firstName": "...", "lastName": "..." } }
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let post = state.store.insert(NewPost::from(payload)).await?;

    info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /posts/{id}
/// Body: any subset of { "title", "content", "author" }
pub async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    ValidatedJson(payload): ValidatedJson<UpdatePostRequest>,
) -> Result<StatusCode, ApiError> {
    if let Some(body_id) = payload.id {
        if body_id != id {
            return Err(ApiError::ValidationError(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let changes = PostChanges::from(payload);
    if changes.is_empty() {
        // Nothing to write, but the target still has to exist.
        state.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    } else {
        state.store.update(id, changes).await?;
    }

    info!("Post updated: {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;

    info!("Post deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
