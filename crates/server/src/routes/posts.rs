use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::post::{Post, PostPayload};

use super::params::{ListParams, parse_row_id};
use crate::{
    Deployment,
    error::ApiError,
    response::{CreatedResponse, MessageResponse},
};

fn not_found() -> ApiError {
    ApiError::NotFound("Post not found".to_string())
}

/// GET /api/posts - Blog listing, newest first
pub async fn get_posts(
    State(deployment): State<Deployment>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<Vec<Post>>, ApiError> {
    let posts = Post::find_all(&deployment.db().pool, params.row_limit())
        .await
        .map_err(ApiError::store("fetch posts"))?;
    Ok(ResponseJson(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Post>, ApiError> {
    let id = parse_row_id(&id).ok_or_else(not_found)?;
    Post::find_by_id(&deployment.db().pool, id)
        .await
        .map_err(ApiError::store("fetch post"))?
        .map(ResponseJson)
        .ok_or_else(not_found)
}

/// POST /api/posts
pub async fn create_post(
    State(deployment): State<Deployment>,
    payload: Result<Json<PostPayload>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<CreatedResponse>), ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("create post"))?;
    let id = Post::create(&deployment.db().pool, &payload)
        .await
        .map_err(ApiError::store("create post"))?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(CreatedResponse {
            id,
            message: "Post created",
        }),
    ))
}

/// PUT /api/posts/{id} - Replace a post. An unknown id is a silent no-op.
pub async fn update_post(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
    payload: Result<Json<PostPayload>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("update post"))?;
    if let Some(id) = parse_row_id(&id) {
        let changed = Post::update(&deployment.db().pool, id, &payload)
            .await
            .map_err(ApiError::store("update post"))?;
        if changed == 0 {
            tracing::debug!(id, "Post update matched no row");
        }
    }
    Ok(ResponseJson(MessageResponse::new("Post updated")))
}

/// DELETE /api/posts/{id} - An unknown id is a silent no-op.
pub async fn delete_post(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    if let Some(id) = parse_row_id(&id) {
        Post::delete(&deployment.db().pool, id)
            .await
            .map_err(ApiError::store("delete post"))?;
    }
    Ok(ResponseJson(MessageResponse::new("Post deleted")))
}

pub fn router() -> Router<Deployment> {
    Router::new()
        .route("/posts", get(get_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}
