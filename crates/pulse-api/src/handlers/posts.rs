//! Post handlers
//!
//! Endpoints for the post lifecycle: listing, detail, create, update,
//! and soft/permanent delete.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pulse_service::{
    CreatePostRequest, DeleteOutcome, FeedPostResponse, FeedService, PostDetailResponse,
    PostService, UpdatePostRequest, WrittenPostResponse,
};
use serde::{Deserialize, Serialize};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, MessageBody};
use crate::state::AppState;

/// Feed listing body
#[derive(Debug, Serialize)]
pub struct FeedBody {
    pub posts: Vec<FeedPostResponse>,
}

/// Single post body
#[derive(Debug, Serialize)]
pub struct PostDetailBody {
    pub post: PostDetailResponse,
}

/// Mutation response carrying the written post
#[derive(Debug, Serialize)]
pub struct PostMutationBody {
    pub message: String,
    pub post: WrittenPostResponse,
}

/// Query parameters for delete
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// `?force=true` requests permanent deletion
    #[serde(default)]
    pub force: bool,
}

/// List all active posts
///
/// GET /api/posts
pub async fn index(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<FeedBody>> {
    let service = FeedService::new(state.service_context());
    let posts = service.list_feed().await?;
    Ok(Json(FeedBody { posts }))
}

/// Get a single post with its likes
///
/// GET /api/posts/{id}
pub async fn show(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<Json<PostDetailBody>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = FeedService::new(state.service_context());
    let post = service.get_post_detail(post_id).await?;
    Ok(Json(PostDetailBody { post }))
}

/// Create a post
///
/// POST /api/posts
pub async fn store(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostMutationBody>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(PostMutationBody {
        message: "Post created successfully".to_string(),
        post,
    })))
}

/// Update an own post
///
/// PUT /api/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostMutationBody>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = PostService::new(state.service_context());
    let post = service.update_post(post_id, auth.user_id, request).await?;
    Ok(Json(PostMutationBody {
        message: "Post updated successfully".to_string(),
        post,
    }))
}

/// Delete an own post, softly or permanently with `?force=true`
///
/// DELETE /api/posts/{id}
pub async fn destroy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Json<MessageBody>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post id format"))?;

    let service = PostService::new(state.service_context());
    let outcome = service
        .delete_post(post_id, auth.user_id, params.force)
        .await?;

    let message = match outcome {
        DeleteOutcome::PermanentlyDeleted => "Post permanently deleted",
        DeleteOutcome::SoftDeleted => "Post deleted successfully (soft delete)",
    };
    Ok(Json(MessageBody::new(message)))
}
