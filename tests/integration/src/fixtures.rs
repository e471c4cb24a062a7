//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Auth fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Register response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    pub access: AccessResponse,
}

/// Issued token block
#[derive(Debug, Deserialize)]
pub struct AccessResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

// ============================================================================
// Post fixtures
// ============================================================================

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            content: format!("Test post content {suffix}"),
            image: None,
        }
    }
}

/// Update post request
#[derive(Debug, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Post mutation response (create/update)
#[derive(Debug, Deserialize)]
pub struct PostMutationResponse {
    pub message: String,
    pub post: PostResponse,
}

/// Post as returned from create/update
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user: UserResponse,
    pub content: String,
    pub image: Option<String>,
}

/// Feed listing response
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub posts: Vec<FeedPost>,
}

/// Feed entry
#[derive(Debug, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub user: UserResponse,
    pub content: String,
    pub image: Option<String>,
    pub likes_count: i64,
}

/// Post detail response
#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostDetail,
}

/// Post detail with per-like entries
#[derive(Debug, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub user: UserResponse,
    pub content: String,
    pub likes: Vec<PostDetailLike>,
}

/// Per-like entry inside a post detail
#[derive(Debug, Deserialize)]
pub struct PostDetailLike {
    pub user_id: String,
    pub user_name: String,
}

/// Per-user posts listing response
#[derive(Debug, Deserialize)]
pub struct UserPostsResponse {
    pub posts: Vec<UserPost>,
}

/// Per-user posts entry (no owner block)
#[derive(Debug, Deserialize)]
pub struct UserPost {
    pub id: String,
    pub content: String,
    pub likes_count: i64,
}

// ============================================================================
// Like fixtures
// ============================================================================

/// Like mutation response
#[derive(Debug, Deserialize)]
pub struct LikeMutationResponse {
    pub message: String,
    pub like: LikeData,
}

/// Like payload
#[derive(Debug, Deserialize)]
pub struct LikeData {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
}

/// Likes listing response
#[derive(Debug, Deserialize)]
pub struct LikesResponse {
    pub likes: Vec<PostLike>,
}

/// Entry in a likes listing
#[derive(Debug, Deserialize)]
pub struct PostLike {
    pub id: String,
    pub user: UserResponse,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
