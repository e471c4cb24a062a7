//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use pulse_core::entities::{Like, Post, User};

use super::responses::{
    CurrentUserResponse, FeedPostResponse, LikeResponse, OwnPostResponse, UserSummaryResponse,
    WrittenPostResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
        }
    }
}

impl From<User> for UserSummaryResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

/// Helper struct pairing a post with its owner
pub struct PostWithOwner {
    pub post: Post,
    pub owner: User,
}

impl From<PostWithOwner> for WrittenPostResponse {
    fn from(data: PostWithOwner) -> Self {
        Self {
            id: data.post.id.to_string(),
            user: UserSummaryResponse::from(&data.owner),
            content: data.post.content,
            image: data.post.image,
            created_at: data.post.created_at,
            updated_at: data.post.updated_at,
        }
    }
}

/// Helper struct pairing a post with its owner and like count
pub struct PostWithEngagement {
    pub post: Post,
    pub owner: User,
    pub like_count: i64,
}

impl From<PostWithEngagement> for FeedPostResponse {
    fn from(data: PostWithEngagement) -> Self {
        Self {
            id: data.post.id.to_string(),
            user: UserSummaryResponse::from(&data.owner),
            content: data.post.content,
            image: data.post.image,
            likes_count: data.like_count,
            created_at: data.post.created_at,
            updated_at: data.post.updated_at,
        }
    }
}

impl From<(Post, i64)> for OwnPostResponse {
    fn from((post, like_count): (Post, i64)) -> Self {
        Self {
            id: post.id.to_string(),
            content: post.content,
            image: post.image,
            likes_count: like_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

// ============================================================================
// Like Mappers
// ============================================================================

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id.to_string(),
            user_id: like.user_id.to_string(),
            post_id: like.post_id.to_string(),
            created_at: like.created_at,
        }
    }
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self::from(&like)
    }
}
