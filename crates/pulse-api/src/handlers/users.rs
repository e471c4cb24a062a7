//! User handlers
//!
//! Endpoints for the current user's profile and per-user post listings.

use axum::{
    extract::{Path, State},
    Json,
};
use pulse_service::{CurrentUserResponse, FeedService, OwnPostResponse, UserService};
use serde::Serialize;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Current user body
#[derive(Debug, Serialize)]
pub struct MeBody {
    pub user: CurrentUserResponse,
}

/// Per-user posts body
#[derive(Debug, Serialize)]
pub struct UserPostsBody {
    pub posts: Vec<OwnPostResponse>,
}

/// Get the current authenticated user
///
/// GET /api/users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeBody>> {
    let service = UserService::new(state.service_context());
    let user = service.get_current_user(auth.user_id).await?;
    Ok(Json(MeBody { user }))
}

/// List one user's active posts
///
/// GET /api/users/{id}/posts
pub async fn user_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserPostsBody>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = FeedService::new(state.service_context());
    let posts = service.list_user_posts(user_id).await?;
    Ok(Json(UserPostsBody { posts }))
}
