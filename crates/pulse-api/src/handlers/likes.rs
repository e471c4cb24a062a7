//! Like handlers
//!
//! Endpoints for liking, unliking, and listing a post's likes.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{LikeResponse, LikeService, PostLikeResponse};
use serde::Serialize;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created, MessageBody};
use crate::state::AppState;

/// Like mutation response body
#[derive(Debug, Serialize)]
pub struct LikeMutationBody {
    pub message: String,
    pub like: LikeResponse,
}

/// Likes listing body
#[derive(Debug, Serialize)]
pub struct LikesBody {
    pub likes: Vec<PostLikeResponse>,
}

/// Like a post
///
/// POST /api/posts/{id}/like
pub async fn like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Created<Json<LikeMutationBody>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = LikeService::new(state.service_context());
    let like = service.like(auth.user_id, post_id).await?;
    Ok(Created(Json(LikeMutationBody {
        message: "Post liked successfully".to_string(),
        like,
    })))
}

/// Remove the requester's like from a post
///
/// DELETE /api/posts/{id}/unlike
pub async fn unlike(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = LikeService::new(state.service_context());
    service.unlike(auth.user_id, post_id).await?;
    Ok(Json(MessageBody::new("Post unliked successfully")))
}

/// List a post's likes
///
/// GET /api/posts/{id}/likes
pub async fn post_likes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<LikesBody>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = LikeService::new(state.service_context());
    let likes = service.list_likes(post_id).await?;
    Ok(Json(LikesBody { likes }))
}
