//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Public user summary attached to posts and likes
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Feed entry: post with owner summary and like count
#[derive(Debug, Clone, Serialize)]
pub struct FeedPostResponse {
    pub id: String,
    pub user: UserSummaryResponse,
    pub content: String,
    pub image: Option<String>,
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single post with full per-like detail
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    pub id: String,
    pub user: UserSummaryResponse,
    pub content: String,
    pub image: Option<String>,
    pub likes: Vec<LikeDetailResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-like detail inside a post detail response
#[derive(Debug, Clone, Serialize)]
pub struct LikeDetailResponse {
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in a single user's post listing (no owner block)
#[derive(Debug, Clone, Serialize)]
pub struct OwnPostResponse {
    pub id: String,
    pub content: String,
    pub image: Option<String>,
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Freshly created or updated post (no engagement attached yet)
#[derive(Debug, Clone, Serialize)]
pub struct WrittenPostResponse {
    pub id: String,
    pub user: UserSummaryResponse,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Like Responses
// ============================================================================

/// A like as returned from the like endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in a post's likes listing
#[derive(Debug, Clone, Serialize)]
pub struct PostLikeResponse {
    pub id: String,
    pub user: UserSummaryResponse,
    pub created_at: DateTime<Utc>,
}
